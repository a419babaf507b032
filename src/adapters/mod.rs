//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter      | Implements    | Connects to                    |
//! |--------------|---------------|--------------------------------|
//! | `display`    | DisplayPort   | Log output (character display) |
//! | `hardware`   | DisplayPort   | Bundles display + indicator    |
//! |              | IndicatorPort |                                |
//! | `indicator`  | IndicatorPort | Any `embedded-hal` output pin  |
//! | `log_sink`   | EventSink     | Serial log output              |

pub mod display;
pub mod hardware;
pub mod indicator;
pub mod log_sink;

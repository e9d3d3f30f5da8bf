// SPDX-License-Identifier: MPL-2.0

mod session;
pub mod settings;

pub use session::HoverSession;
pub use settings::{CursorOffset, ProfilerSettings, Timing};

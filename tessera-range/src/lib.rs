//! Headless dual-thumb range slider for the Tessera UI framework.
//!
//! A range slider selects a contiguous sub-range `[min, max]` with two thumbs
//! on one track. Two selection modes are supported:
//!
//! - [`Continuous`]: any value between `lo` and `hi`; pointer input snaps to
//!   multiples of `step`.
//! - [`Fixed`]: one of a predefined list of values, selected by index.
//!
//! The crate owns state and interaction only. Hosts forward raw input (key
//! identifiers, pointer coordinates with the track geometry, typed text) and
//! render from the derived [`view`] snapshots. Whatever the input, the
//! selection always satisfies `lowest <= min <= max <= highest`.
//!
//! # Example
//!
//! ```
//! use tessera_range::{
//!     FixedRangeArgsBuilder, PointerEvent, RangeSlider, RangeValues, Thumb, TrackRect,
//! };
//!
//! let args = FixedRangeArgsBuilder::default()
//!     .values(vec![1.99, 5.99, 10.99, 30.99, 50.99, 70.99])
//!     .on_change(|values: RangeValues| println!("{} - {}", values.min, values.max))
//!     .build()
//!     .unwrap();
//! let mut slider = RangeSlider::fixed(args).unwrap();
//!
//! slider.on_pointer_start(Thumb::Min);
//! slider.on_pointer_move(&PointerEvent::mouse_move(120.0), TrackRect::new(0.0, 200.0));
//! slider.on_pointer_end();
//!
//! assert_eq!(slider.min_index(), 3);
//! assert_eq!(slider.display_value(Thumb::Min), "€30.99");
//! ```
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod callback;

pub mod accessibility;
pub mod context;
pub mod domain;
pub mod edit;
pub mod error;
pub mod keyboard;
pub mod listeners;
pub mod pointer;
pub mod position;
pub mod slider;
pub mod store;
pub mod view;

pub use accessibility::ThumbSemantics;
pub use callback::ChangeCallback;
pub use context::{provide_range, try_use_range, use_range};
pub use domain::{Continuous, Fixed, RangeDomain};
pub use edit::EditOutcome;
pub use error::{ContextError, RangeError};
pub use keyboard::{Key, KeyOutcome};
pub use listeners::{DocumentEvent, DocumentListeners, DocumentTarget, ListenerGuard};
pub use pointer::{DragState, PointerEvent};
pub use position::TrackRect;
pub use slider::{
    ContinuousRangeArgs, ContinuousRangeArgsBuilder, FixedRangeArgs, FixedRangeArgsBuilder,
    RangeHandle, RangeSlider,
};
pub use store::{Endpoints, IndexSelection, RangeSelection, RangeValues, Thumb};

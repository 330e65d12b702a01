//! Interactive slide-transition machinery for Slideover
//!
//! Percent adapters turn drag samples into completion percentages, the
//! interactive driver resolves them into finish or cancel, the animator
//! produces the frame plan both paths share, and the coordinator decides
//! which of those serve a given transition request.

mod adapter;
mod animator;
mod constants;
mod coordinator;
mod driver;

pub use adapter::*;
pub use animator::*;
pub use constants::*;
pub use coordinator::*;
pub use driver::*;

pub mod prelude {
    pub use crate::adapter::{
        EdgePercentAdapter, GestureSignalAdapter, PanPercentAdapter, SceneGeometry,
    };
    pub use crate::animator::{AnimationHandle, AnimationPlan, FrameTween, TransitionAnimator};
    pub use crate::coordinator::{TransitionCoordinator, TransitionRequest};
    pub use crate::driver::{DriverState, InteractiveTransitionDriver};
}

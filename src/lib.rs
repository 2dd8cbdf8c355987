//! Coverflow renders a horizontally scrolling carousel of flat images in
//! simulated 3-D perspective and animates focus changes between them.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: raw images become [`CoverVisual`]s (scaled, with a faded
//!    reflection underneath) via [`prepare_cover`] or [`load_cover_dir`].
//! 2. **Arrange**: [`arrange_covers`] places every cover around the focus;
//!    while a transition runs, [`AnimationState`] owns the leaving cover and
//!    the one it is approaching.
//! 3. **Compose**: [`compose_frame`] ray-casts the focus cover, then its
//!    neighbors outward, into a [`FrameBuffer`].
//!
//! [`Carousel`] ties these together behind a small [`Scheduler`] interface.
//!
//! All geometry is carried in [`Fixed`] (16 fractional bits) so animation is
//! bit-for-bit reproducible. `unsafe` is forbidden in this crate.
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod carousel;
mod foundation;
mod layout;
mod render;

pub use animation::controller::{AnimationState, Direction, EdgeFade, TickOutcome};
pub use animation::ease::{AMPLITUDE, BASE_SPEED, MAX_DISTANCE, speed_for_distance};
pub use assets::decode::{decode_image, load_cover, load_cover_dir};
pub use assets::reflect::{placeholder_cover, prepare_cover};
pub use assets::visual::CoverVisual;
pub use carousel::config::CarouselConfig;
pub use carousel::schedule::{ManualScheduler, Scheduler};
pub use carousel::state::{Carousel, Mode, PointerAction};
pub use foundation::core::{BLACK, Brightness, ColumnRange, DrawnBounds, Rgba8, Viewport};
pub use foundation::error::{CoverflowError, CoverflowResult};
pub use foundation::fixed::Fixed;
pub use foundation::trig::{ANGLE_MAX, Angle};
pub use layout::arrange::arrange_covers;
pub use layout::cover::{Cover, Placement};
pub use layout::geometry::Geometry;
pub use render::compose::{ComposeOptions, FrameReport, compose_detail, compose_frame};
pub use render::perspective::render_cover;
pub use render::rays::RayTable;
pub use render::surface::FrameBuffer;

pub mod ballistics;
pub mod error;
pub mod plot;
pub mod readout;
pub mod render;
pub mod surface;
pub mod window;

pub use ballistics::{
    SimulationParameters, Trajectory, TrajectoryMetrics, TrajectoryPoint, compute_metrics,
    sample_points,
};
pub use error::{InvalidReason, SimError};
pub use render::{AnimationState, FrameOutcome, FrameTicket, RenderLoop, RenderSettings};
pub use surface::{DisplayList, DrawCommand, DrawSurface, Rgb, ScreenPoint, Stroke};
pub use window::Viewport;

pub mod app;
pub mod camera;
pub mod session;
pub mod table;

pub use app::App;
pub use camera::Camera;
pub use session::TableSession;
pub use table::{build_table, TableLayout};

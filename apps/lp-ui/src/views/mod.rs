pub mod log_view;
pub mod matrix_view;
pub mod text_view;

pub use log_view::LogView;
pub use matrix_view::MatrixView;
pub use text_view::TextView;

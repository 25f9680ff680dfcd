//! Charts module - Plotly figure model and the dashboard views

mod figure;
mod views;

pub use figure::Figure;
pub use views::LaunchCharts;

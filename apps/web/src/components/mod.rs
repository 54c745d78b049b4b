mod app;
mod hospital_row;
mod results_panel;
mod search_panel;

pub use app::App;
pub use hospital_row::HospitalRow;
pub use results_panel::ResultsPanel;
pub use search_panel::SearchPanel;

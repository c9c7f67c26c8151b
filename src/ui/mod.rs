/// egui front end: side panel, top bar, page bodies, tables and charts.
pub mod pages;
pub mod panels;
pub mod plot;
pub mod table;

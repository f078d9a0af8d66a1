pub mod api;
pub mod cards;
pub mod chart_js;
pub mod charts;
pub mod controller;
pub mod ui;

pub mod aggregates;
pub mod criteria;
pub mod filtered_view;
pub mod meteo_variable;
pub mod period;

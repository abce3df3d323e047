// src/ui/components/mod.rs - Reusable UI components

mod charts;
mod gate;
mod kpi_card;

pub use charts::{BarSeries, DonutSeries, LineSeries, LineSeriesPoint};
pub use gate::SuperadminGate;
pub use kpi_card::{ErrorBanner, KpiCard, KpiTone};

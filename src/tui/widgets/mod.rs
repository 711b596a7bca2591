//! View primitives: gauges, history charts and the info line.

mod gauge;
mod info;
mod stacked;
mod view;

pub use gauge::{HorizontalGauge, VerticalGauge};
pub use info::InfoLine;
pub use stacked::StackedChart;
pub use view::{
    LABEL_WIDTH, LabelAlign, Reading, Resource, ResourceView, band_cells, fill_cells,
    insert_clipped, write_clipped,
};

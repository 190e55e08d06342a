use super::domain::{OccupancySegment, PaymentCategory};
use super::views::{NewCustomerEntry, OccupancySplit, OriginShare, PaymentStatusEntry};
use plotly::common::Marker;
use plotly::layout::{Axis, Layout, Margin};
use plotly::{Bar, Pie, Plot};

/// Qualitative palette for the origin donut; cycled when a snapshot reports
/// more acquisition channels than there are colors.
const ORIGIN_PALETTE: [&str; 11] = [
    "rgb(102,197,204)",
    "rgb(246,207,113)",
    "rgb(248,156,116)",
    "rgb(220,176,242)",
    "rgb(135,197,95)",
    "rgb(158,185,243)",
    "rgb(254,136,177)",
    "rgb(201,219,116)",
    "rgb(139,224,164)",
    "rgb(180,151,231)",
    "rgb(179,179,179)",
];

/// Donut of occupied vs. free units, each segment showing its percentage
/// share and its raw count.
pub fn occupancy_donut(occupancy: OccupancySplit) -> Plot {
    let segments = OccupancySegment::ordered();
    let labels: Vec<String> = segments
        .iter()
        .map(|segment| segment.label().to_string())
        .collect();
    let colors: Vec<&str> = segments.iter().map(|segment| segment.color()).collect();

    let trace = Pie::new(vec![occupancy.occupied, occupancy.free])
        .labels(labels)
        .hole(0.5)
        .marker(Marker::new().color_array(colors))
        .text_info("percent+value");

    let layout = Layout::new()
        .title("Auslastung Lagerräume")
        .show_legend(true)
        .margin(Margin::new().top(40).bottom(20))
        .auto_size(true);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// One bar per month in document order, value-labeled.
pub fn new_customers_bar(entries: &[NewCustomerEntry]) -> Plot {
    let months: Vec<String> = entries.iter().map(|entry| entry.month.clone()).collect();
    let counts: Vec<u64> = entries.iter().map(|entry| entry.count).collect();
    let value_labels: Vec<String> = counts.iter().map(u64::to_string).collect();

    let trace = Bar::new(months, counts)
        .marker(Marker::new().color("orange"))
        .text_array(value_labels);

    let layout = Layout::new()
        .title("Neukunden pro Monat")
        .x_axis(Axis::new().title("Monat"))
        .y_axis(Axis::new().title("Neukunden"))
        .margin(Margin::new().top(40).bottom(40))
        .auto_size(true);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Paid / open / overdue invoice counts in fixed order, one color per
/// category.
pub fn payment_status_bar(entries: &[PaymentStatusEntry]) -> Plot {
    let categories: Vec<String> = entries
        .iter()
        .map(|entry| entry.category_label.to_string())
        .collect();
    let counts: Vec<u64> = entries.iter().map(|entry| entry.count).collect();
    let colors: Vec<&str> = entries.iter().map(|entry| entry.category.color()).collect();
    let value_labels: Vec<String> = counts.iter().map(u64::to_string).collect();

    let trace = Bar::new(categories, counts)
        .marker(Marker::new().color_array(colors))
        .text_array(value_labels);

    let layout = Layout::new()
        .title("Zahlungsstatus")
        .y_axis(Axis::new().title("Anzahl Rechnungen"))
        .margin(Margin::new().top(40).bottom(20))
        .auto_size(true);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Donut with one segment per acquisition channel in document order; labels
/// live on the segments, so the legend stays hidden.
pub fn customer_origin_donut(shares: &[OriginShare]) -> Plot {
    let labels: Vec<String> = shares.iter().map(|share| share.origin.clone()).collect();
    let counts: Vec<u64> = shares.iter().map(|share| share.count).collect();
    let colors: Vec<&str> = ORIGIN_PALETTE
        .iter()
        .cycle()
        .take(shares.len())
        .copied()
        .collect();

    let trace = Pie::new(counts)
        .labels(labels)
        .hole(0.4)
        .marker(Marker::new().color_array(colors))
        .text_info("percent+label");

    let layout = Layout::new()
        .title("Kundenherkunft")
        .show_legend(false)
        .height(400)
        .margin(Margin::new().top(40).bottom(20))
        .auto_size(true);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

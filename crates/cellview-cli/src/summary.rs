use std::path::Path;

use cellview_core::bubble::BubbleOptions;
use cellview_core::discovery::WellId;
use cellview_core::layout::GridLayout;
use cellview_core::well::WellView;
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_layout_summary(name: &str, layout: &GridLayout, output: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(name));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Panels"),
        s.value.apply_to(format!(
            "{} ({} x {})",
            layout.len(),
            layout.nrows(),
            layout.ncols()
        ))
    );
    for (i, panel) in layout.panels().iter().enumerate() {
        if let Some(glyph) = panel.image_glyph() {
            let (h, w) = glyph.image.shape();
            println!(
                "  {:<14}{}",
                s.label.apply_to(format!("Panel {}", i + 1)),
                s.value.apply_to(format!("{w}x{h} px"))
            );
        }
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();
}

pub fn print_well_summary(id: WellId, view: &WellView, bf_path: &Path, sig_path: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(format!("Well {id}")));
    println!(
        "  {:<20}{}",
        s.label.apply_to("Brightfield area"),
        s.value.apply_to(format!("{} px", view.brightfield_area))
    );
    println!(
        "  {:<20}{}",
        s.label.apply_to("Signal area"),
        s.value.apply_to(format!("{} px", view.signal_area))
    );
    println!(
        "  {:<20}{}",
        s.label.apply_to("Brightfield view"),
        s.path.apply_to(bf_path.display())
    );
    println!(
        "  {:<20}{}",
        s.label.apply_to("Signal view"),
        s.path.apply_to(sig_path.display())
    );
    println!();
}

pub fn print_bubble_summary(
    opts: &BubbleOptions,
    rows: usize,
    size_bounds: (f64, f64),
    color_bounds: (f64, f64),
    output: &Path,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Bubble summary"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Rows"),
        s.value.apply_to(rows)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Axes"),
        s.value.apply_to(format!("{} x {}", opts.x_column, opts.y_column))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!(
            "{} [{}, {}]",
            opts.size_column, size_bounds.0, size_bounds.1
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Color"),
        s.value.apply_to(format!(
            "{} [{}, {}]",
            opts.color_column, color_bounds.0, color_bounds.1
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();
}

//! Text-table rendering of a product sequence.

use scorta_api_types::Product;

const HEADERS: [&str; 5] = ["ID", "NAME", "CATEGORY", "QUANTITY", "PRICE"];

/// Render `products` as an aligned text table, in sequence order.
///
/// The output is rebuilt from scratch on every call and depends only on the
/// input, so rendering unchanged data twice yields identical text.
pub fn table(products: &[Product]) -> String {
    let rows: Vec<[String; 5]> = products
        .iter()
        .map(|p| {
            [
                p.id.clone(),
                p.name.clone(),
                p.category.clone(),
                p.quantity.to_string(),
                format!("{:.2}", p.price),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, &HEADERS.map(str::to_string));
    push_separator(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, &widths, row);
    }
    out
}

fn push_row(out: &mut String, widths: &[usize; 5], cells: &[String; 5]) {
    let line = widths
        .iter()
        .zip(cells.iter())
        .map(|(&width, cell)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize; 5]) {
    let line = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&line);
    out.push('\n');
}

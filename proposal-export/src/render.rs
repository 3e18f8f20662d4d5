//! Plain-text rendering of a finalized proposal document.
//!
//! The printable artifact is two pages of fixed-width text: page 1 carries
//! the header metadata, the materials table with per-line effective totals,
//! the grand totals and the numbered notes; page 2 carries the discovery
//! table and the signatories. All monetary amounts pass through
//! [`crate::locale::format_amount`], so the artifact shows exactly two
//! fraction digits with the fixed locale separators.

use std::io;

use proposal_core::calculations::effective_line_total;
use proposal_core::{DiscoveryRow, MaterialLine, ProposalDocument, Signatory};
use thiserror::Error;
use tracing::debug;

use crate::locale::{format_amount, format_quantity};

/// Total character width of one artifact line.
const PAGE_WIDTH: usize = 112;

/// Errors surfaced by the export step. Rendering itself cannot fail; only
/// delivering the artifact to the output sink can.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write proposal document: {0}")]
    Io(#[from] io::Error),
}

/// Renders the full printable artifact as a string.
pub fn render_document(doc: &ProposalDocument) -> String {
    let mut out = String::new();
    render_page1(doc, &mut out);
    render_page2(doc, &mut out);
    out
}

/// Renders the artifact into `writer`. Any I/O failure is surfaced as a
/// single terminal [`ExportError`]; nothing guarantees a partial artifact
/// beyond what the writer already consumed.
pub fn write_document<W: io::Write>(
    doc: &ProposalDocument,
    writer: &mut W,
) -> Result<(), ExportError> {
    let rendered = render_document(doc);
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    debug!(bytes = rendered.len(), "proposal document written");
    Ok(())
}

// ─── Page 1: materials, totals, notes ────────────────────────────────────

fn render_page1(
    doc: &ProposalDocument,
    out: &mut String,
) {
    page_banner(&doc.page1_title, &doc.product_title, out);
    render_metadata(doc, out);
    render_materials(doc, out);
    render_totals(doc, out);
    render_notes(doc, out);
}

fn render_metadata(
    doc: &ProposalDocument,
    out: &mut String,
) {
    out.push_str(&format!("Proje       : {}\n", doc.project_name));
    out.push_str(&format!("Sayın       : {}\n", doc.attention_to));
    out.push_str(&format!("Konu        : {}\n", doc.subject));
    out.push_str(&format!(
        "Tarih       : {}\n",
        doc.date.format("%d.%m.%Y")
    ));
    out.push_str(&format!("Para Birimi : {}\n\n", doc.currency));
}

fn render_materials(
    doc: &ProposalDocument,
    out: &mut String,
) {
    rule(out);
    out.push_str(&format!(
        "{} {} {} {} {} {} {}\n",
        pad("Ürün No", 12),
        pad("Ürün Tanımı", 34),
        pad("Ebat/Detay", 20),
        pad_num("Miktar", 8),
        pad("Birim", 6),
        pad_num("Birim Fiyat", 12),
        pad_num("Tutar", 14),
    ));
    rule(out);
    for line in &doc.materials {
        render_material_line(line, out);
    }
    rule(out);
}

fn render_material_line(
    line: &MaterialLine,
    out: &mut String,
) {
    out.push_str(&format!(
        "{} {} {} {} {} {} {}\n",
        pad(&line.product_code, 12),
        pad(&line.description, 34),
        pad(&line.dimensions, 20),
        pad_num(&format_quantity(line.request_qty), 8),
        pad(&line.unit, 6),
        pad_num(&format_amount(line.unit_price), 12),
        pad_num(&format_amount(effective_line_total(line)), 14),
    ));
}

fn render_totals(
    doc: &ProposalDocument,
    out: &mut String,
) {
    out.push_str(&format!(
        "{} {}\n",
        pad_num("Hesaplanan (Satır Toplamı) :", PAGE_WIDTH - 21),
        pad_num(
            &format!("{} {}", format_amount(doc.calculated_total()), doc.currency),
            20
        ),
    ));
    out.push_str(&format!(
        "{} {}\n\n",
        pad_num("GENEL TOPLAM :", PAGE_WIDTH - 21),
        pad_num(
            &format!("{} {}", format_amount(doc.display_total()), doc.currency),
            20
        ),
    ));
}

fn render_notes(
    doc: &ProposalDocument,
    out: &mut String,
) {
    if doc.notes.is_empty() {
        return;
    }
    out.push_str("NOTLAR & ŞARTLAR\n");
    for (index, note) in doc.notes.iter().enumerate() {
        out.push_str(&format!("  {}- {}\n", index + 1, note));
    }
    out.push('\n');
}

// ─── Page 2: discovery, signatories ──────────────────────────────────────

fn render_page2(
    doc: &ProposalDocument,
    out: &mut String,
) {
    page_banner(&doc.page2_title, "Sayfa 2", out);
    render_discovery(doc, out);
    render_signatories(doc, out);
}

fn render_discovery(
    doc: &ProposalDocument,
    out: &mut String,
) {
    rule(out);
    out.push_str(&format!(
        "{} {} {} {} {} {} {} {}\n",
        pad("Kat", 14),
        pad("Mahal", 24),
        pad_num("Alan (m²)", 10),
        pad_num("Mt/m²", 8),
        pad_num("Boru (Mt)", 10),
        pad_num("Devre", 6),
        pad_num("Term.", 6),
        pad("Kollektör", 12),
    ));
    rule(out);
    for row in &doc.discovery {
        render_discovery_row(row, out);
    }
    rule(out);
    out.push('\n');
}

fn render_discovery_row(
    row: &DiscoveryRow,
    out: &mut String,
) {
    out.push_str(&format!(
        "{} {} {} {} {} {} {} {}\n",
        pad(&row.floor, 14),
        pad(&row.room_name, 24),
        pad_num(&format_quantity(row.area), 10),
        pad_num(&format_quantity(row.pipe_density), 8),
        pad_num(&format_quantity(row.pipe_length), 10),
        pad_num(&row.circuits.to_string(), 6),
        pad_num(&row.thermostat_count.to_string(), 6),
        pad(&row.collector, 12),
    ));
}

fn render_signatories(
    doc: &ProposalDocument,
    out: &mut String,
) {
    if doc.signatories.is_empty() {
        return;
    }
    out.push_str("İMZA YETKİLİLERİ\n");
    for sig in &doc.signatories {
        render_signatory(sig, out);
    }
}

fn render_signatory(
    sig: &Signatory,
    out: &mut String,
) {
    if sig.email.is_empty() {
        out.push_str(&format!("  {}\n", sig.name));
    } else {
        out.push_str(&format!("  {} <{}>\n", sig.name, sig.email));
    }
}

// ─── Layout helpers ──────────────────────────────────────────────────────

fn page_banner(
    title: &str,
    corner: &str,
    out: &mut String,
) {
    out.push_str(&"=".repeat(PAGE_WIDTH));
    out.push('\n');
    let corner_width = PAGE_WIDTH.saturating_sub(title.chars().count() + 1);
    out.push_str(&format!("{} {}\n", title, pad_num(corner, corner_width)));
    out.push_str(&"=".repeat(PAGE_WIDTH));
    out.push('\n');
}

fn rule(out: &mut String) {
    out.push_str(&"-".repeat(PAGE_WIDTH));
    out.push('\n');
}

/// Left-aligns `text` in `width` columns, truncating when it does not fit.
fn pad(
    text: &str,
    width: usize,
) -> String {
    if text.chars().count() > width {
        text.chars().take(width).collect()
    } else {
        format!("{text:<width$}")
    }
}

/// Right-aligns `text` in `width` columns (numeric cells and headers).
fn pad_num(
    text: &str,
    width: usize,
) -> String {
    format!("{text:>width$}")
}

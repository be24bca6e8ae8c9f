//! Spreadsheet report writer

use crate::output::report::{Cell, ProductReport, SheetView};
use crate::output::traits::{OutputResult, ReportWriter};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};

/// Writes a [`ProductReport`] as a two-sheet `.xlsx` workbook
#[derive(Debug, Clone)]
pub struct XlsxReportWriter {
    path: PathBuf,
}

impl XlsxReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for XlsxReportWriter {
    fn write_report(&self, report: &ProductReport) -> OutputResult<()> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();

        for sheet in report.sheets() {
            let worksheet = workbook.add_worksheet();
            write_sheet(worksheet, sheet, &header)?;
        }

        workbook.save(&self.path)?;

        tracing::info!(
            "Wrote report to {} ({} products, {} reviewed)",
            self.path.display(),
            report.by_category.rows.len(),
            report.most_reviewed.rows.len()
        );

        Ok(())
    }
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &SheetView, header: &Format) -> OutputResult<()> {
    worksheet.set_name(sheet.name.as_str())?;

    for (col, name) in (0u16..).zip(sheet.columns.iter()) {
        worksheet.write_string_with_format(0, col, *name, header)?;
    }

    for (row, cells) in (1u32..).zip(sheet.rows.iter()) {
        for (col, cell) in (0u16..).zip(cells.iter()) {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text.as_str())?;
                }
                Cell::Number(number) => {
                    worksheet.write_number(row, col, f64::from(*number))?;
                }
                Cell::Empty => {}
            }
        }
    }

    Ok(())
}

//! New-bill form view and the receipt input fragments

use billed_core::{FileCheck, RoutePath, EXPENSE_TYPES};
use billed_utils::escape_html;

use super::layout::vertical_layout;

const FILE_INPUT_CLASS: &str = "form-control blue-border block w-full text-sm border rounded-lg p-2";

/// Empty receipt input
///
/// With `oob` the input replaces the one on the page, which is how a
/// refused receipt is cleared.
pub fn file_input(accept: &[String], oob: bool) -> String {
    let accept = accept
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        r#"<input required type='file' id='file' name='file' accept='{}' data-testid='file' class='{}'
    hx-post='/bills/new/file' hx-encoding='multipart/form-data' hx-trigger='change' hx-include='this'
    hx-target='#file-status' hx-swap='outerHTML'{} />"#,
        escape_html(&accept),
        FILE_INPUT_CLASS,
        if oob { " hx-swap-oob='true'" } else { "" }
    )
}

/// Status line under the receipt input
fn file_status(text: &str, file_url: Option<&str>) -> String {
    match file_url {
        Some(url) => format!(
            r#"<span id='file-status' data-testid='file-status' data-file-url='{}' class='text-sm text-green-600'>{}</span>"#,
            escape_html(url),
            escape_html(text)
        ),
        None => format!(
            r#"<span id='file-status' data-testid='file-status' class='text-sm text-red-600'>{}</span>"#,
            escape_html(text)
        ),
    }
}

/// Answer to a receipt change
///
/// An accepted receipt only updates the status line. A refused one also
/// swaps in an empty input; its reason is shown when `show_reason` is set.
pub fn file_check_fragment(check: &FileCheck, accept: &[String], show_reason: bool) -> String {
    match check {
        FileCheck::Accepted { file_name, file_url } => file_status(file_name, Some(file_url)),
        FileCheck::Rejected { reason } => {
            let text = if show_reason { reason.message() } else { "" };
            format!("{}{}", file_status(text, None), file_input(accept, true))
        }
    }
}

fn expense_type_options() -> String {
    EXPENSE_TYPES
        .iter()
        .map(|t| format!("<option>{}</option>", escape_html(t)))
        .collect::<Vec<_>>()
        .join("")
}

/// New-bill page
pub fn new_bill_ui(accept: &[String], default_pct: u32) -> String {
    format!(
        r#"<div class='layout flex'>
    {}
    <div class='content flex-1 p-6'>
        <div class='content-header mb-4'><div class='content-title text-2xl font-bold'>Envoyer une note de frais</div></div>
        <div class='form-newbill-container content-inner bg-white rounded-xl shadow-sm p-6'>
            <form data-testid='form-new-bill' hx-post='{}' hx-target='body' class='grid grid-cols-1 md:grid-cols-2 gap-6'>
                <div class='space-y-4'>
                    <div>
                        <label for='expense-type' class='bold-label block text-sm font-medium text-gray-700 mb-1'>Type de dépense</label>
                        <select required name='expense-type' class='form-control blue-border w-full border rounded-lg p-2' data-testid='expense-type'>{}</select>
                    </div>
                    <div>
                        <label for='expense-name' class='bold-label block text-sm font-medium text-gray-700 mb-1'>Nom de la dépense</label>
                        <input type='text' name='expense-name' class='form-control blue-border w-full border rounded-lg p-2' data-testid='expense-name' placeholder='Vol Paris Londres' />
                    </div>
                    <div>
                        <label for='datepicker' class='bold-label block text-sm font-medium text-gray-700 mb-1'>Date</label>
                        <input required type='date' name='datepicker' class='form-control blue-border w-full border rounded-lg p-2' data-testid='datepicker' />
                    </div>
                    <div>
                        <label for='amount' class='bold-label block text-sm font-medium text-gray-700 mb-1'>Montant TTC</label>
                        <input required type='number' name='amount' class='form-control blue-border input-icon input-icon-right w-full border rounded-lg p-2' data-testid='amount' placeholder='348' />
                    </div>
                    <div class='grid grid-cols-2 gap-2'>
                        <div>
                            <label for='vat' class='bold-label block text-sm font-medium text-gray-700 mb-1'>TVA</label>
                            <input type='number' name='vat' class='form-control blue-border w-full border rounded-lg p-2' data-testid='vat' placeholder='70' />
                        </div>
                        <div>
                            <label for='pct' class='white-text block text-sm font-medium text-gray-700 mb-1'>%</label>
                            <input required type='number' name='pct' class='form-control blue-border w-full border rounded-lg p-2' data-testid='pct' placeholder='{}' />
                        </div>
                    </div>
                </div>
                <div class='space-y-4'>
                    <div>
                        <label for='commentary' class='bold-label block text-sm font-medium text-gray-700 mb-1'>Commentaire</label>
                        <textarea class='form-control blue-border w-full border rounded-lg p-2' name='commentary' data-testid='commentary' rows='3'></textarea>
                    </div>
                    <div>
                        <label for='file' class='bold-label block text-sm font-medium text-gray-700 mb-1'>Justificatif</label>
                        {}
                        {}
                    </div>
                </div>
                <div class='md:col-span-2'>
                    <button type='submit' id='btn-send-bill' class='btn btn-primary px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Envoyer</button>
                </div>
            </form>
        </div>
    </div>
</div>"#,
        vertical_layout(RoutePath::NewBill),
        RoutePath::Bills.path(),
        expense_type_options(),
        default_pct,
        file_input(accept, false),
        file_status("", None)
    )
}

//! Bills list view

use billed_core::{DisplayBill, ReceiptModal, RoutePath};
use billed_utils::{escape_html, format_amount};

use super::error::{error_page, loading_page};
use super::layout::vertical_layout;
use super::RenderState;

const EYE_ICON: &str = r#"<svg xmlns='http://www.w3.org/2000/svg' class='h-5 w-5 text-indigo-600' fill='none' viewBox='0 0 24 24' stroke='currentColor'><path stroke-linecap='round' stroke-linejoin='round' stroke-width='2' d='M15 12a3 3 0 11-6 0 3 3 0 016 0z'/><path stroke-linecap='round' stroke-linejoin='round' stroke-width='2' d='M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z'/></svg>"#;

/// Eye icon opening the receipt modal
fn actions(file_url: &str) -> String {
    format!(
        r#"<div class='icon-actions'><div id='eye' data-testid='icon-eye' data-bill-url='{}' class='cursor-pointer' hx-get='/bills/receipt?url={}' hx-target='#modaleFile' hx-swap='innerHTML'>{}</div></div>"#,
        escape_html(file_url),
        urlencoding::encode(file_url),
        EYE_ICON
    )
}

fn row(bill: &DisplayBill) -> String {
    format!(
        r#"<tr class='border-b'>
            <td class='py-2 px-3'>{}</td>
            <td class='py-2 px-3'>{}</td>
            <td class='py-2 px-3'>{}</td>
            <td class='py-2 px-3'>{}</td>
            <td class='py-2 px-3'>{}</td>
            <td class='py-2 px-3'>{}</td>
        </tr>"#,
        escape_html(&bill.bill.bill_type),
        escape_html(&bill.bill.name),
        escape_html(&bill.date),
        format_amount(bill.bill.amount),
        escape_html(&bill.status),
        actions(&bill.bill.file_url)
    )
}

fn rows(bills: &[DisplayBill]) -> String {
    bills.iter().map(row).collect::<Vec<_>>().join("")
}

/// Receipt modal container, filled by the eye icons
fn modal() -> String {
    r#"<div id='modaleFile' data-testid='modaleFile' class='modal' role='dialog' aria-hidden='true'></div>"#.to_string()
}

/// Button leading to the route picked by the controller
fn new_bill_button(route: Option<RoutePath>) -> String {
    match route {
        Some(route) => format!(
            r#"<button type='button' data-testid='btn-new-bill' hx-get='{}' hx-target='body' hx-push-url='true'
                class='btn btn-primary px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>Nouvelle note de frais</button>"#,
            route.path()
        ),
        None => String::new(),
    }
}

/// Bills list page: loading state, error page, or the bills table
pub fn bills_ui(state: &RenderState) -> String {
    if state.loading {
        return loading_page();
    }
    if let Some(error) = &state.error {
        return error_page(error);
    }

    let bills = state.data.as_deref().unwrap_or(&[]);

    format!(
        r#"<div class='layout flex'>
    {}
    <div class='content flex-1 p-6'>
        <div class='content-header flex items-center justify-between mb-4'>
            <div class='content-title text-2xl font-bold'>Mes notes de frais</div>
            {}
        </div>
        <div id='data-table' class='bg-white rounded-xl shadow-sm overflow-hidden'>
            <table id='example' class='table w-full text-left'>
                <thead class='bg-gray-50'><tr><th class='py-2 px-3'>Type</th><th class='py-2 px-3'>Nom</th><th class='py-2 px-3'>Date</th><th class='py-2 px-3'>Montant</th><th class='py-2 px-3'>Statut</th><th class='py-2 px-3'>Actions</th></tr></thead>
                <tbody data-testid='tbody'>{}</tbody>
            </table>
        </div>
    </div>
    {}
</div>"#,
        vertical_layout(RoutePath::Bills),
        new_bill_button(state.new_bill_route),
        rows(bills),
        modal()
    )
}

/// Receipt modal content
pub fn receipt_modal(modal: &ReceiptModal) -> String {
    format!(
        r#"<div class='fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center modal-open' onclick='if(event.target === this) this.remove()'>
    <div class='bg-white rounded-xl shadow-2xl p-6' onclick='event.stopPropagation()'>
        <div class='flex items-center justify-between mb-4'>
            <h5 class='text-lg font-semibold'>Justificatif</h5>
            <button type='button' class='text-gray-500 hover:text-gray-700' onclick="document.getElementById('modaleFile').innerHTML = ''">×</button>
        </div>
        <div style='text-align: center;' class='bill-proof-container'><img width='{}' src='{}' alt='Bill' /></div>
    </div>
</div>"#,
        modal.image_width,
        escape_html(&modal.url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use billed_core::{Bill, BillStatus};
    use rust_decimal::Decimal;

    fn display_bill(id: &str, date: &str, file_url: &str) -> DisplayBill {
        DisplayBill {
            bill: Bill {
                id: id.to_string(),
                email: None,
                bill_type: "Hôtel et logement".to_string(),
                name: "encore".to_string(),
                date: date.to_string(),
                amount: Decimal::from(400),
                vat: Decimal::from(80),
                pct: 20,
                commentary: String::new(),
                file_url: file_url.to_string(),
                file_name: "f.jpg".to_string(),
                status: BillStatus::Pending,
                comment_admin: None,
            },
            date: "4 Avr. 04".to_string(),
            status: "En attente".to_string(),
        }
    }

    #[test]
    fn test_bills_ui_renders_rows() {
        let state = RenderState::with_data(vec![
            display_bill("a", "2004-04-04", "/receipts/a@a/f.jpg"),
            display_bill("b", "2003-03-03", "/receipts/a@a/g.jpg"),
        ])
        .with_new_bill_route(RoutePath::NewBill);
        let html = bills_ui(&state);

        assert!(html.contains("data-testid='btn-new-bill' hx-get='/bills/new'"));
        assert_eq!(html.matches("data-testid='icon-eye'").count(), 2);
        assert!(html.contains("data-bill-url='/receipts/a@a/f.jpg'"));
        assert!(html.contains("4 Avr. 04"));
        assert!(html.contains("400 €"));
        assert!(html.contains("En attente"));
        assert!(html.contains("id='modaleFile'"));
    }

    #[test]
    fn test_new_bill_button_follows_route() {
        let html = bills_ui(&RenderState::with_data(Vec::new()).with_new_bill_route(RoutePath::Login));
        assert!(html.contains("data-testid='btn-new-bill' hx-get='/'"));

        let html = bills_ui(&RenderState::with_data(Vec::new()));
        assert!(!html.contains("btn-new-bill"));
    }

    #[test]
    fn test_bills_ui_error() {
        let html = bills_ui(&RenderState::with_error("Erreur 500"));
        assert!(html.contains("Erreur 500"));
        assert!(!html.contains("data-testid='tbody'"));
    }

    #[test]
    fn test_bills_ui_loading() {
        let html = bills_ui(&RenderState::loading());
        assert!(html.contains("Loading..."));
    }

    #[test]
    fn test_bills_ui_empty() {
        let html = bills_ui(&RenderState::default());
        assert!(html.contains("<tbody data-testid='tbody'></tbody>"));
    }

    #[test]
    fn test_receipt_modal() {
        let html = receipt_modal(&ReceiptModal {
            url: "/receipts/a@a/test.png".to_string(),
            image_width: 400,
        });
        assert!(html.contains("<img width='400' src='/receipts/a@a/test.png' alt='Bill' />"));
        assert!(html.contains("bill-proof-container"));
    }
}

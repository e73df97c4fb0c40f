use crate::state::ModalState;

/// One line per open dialog or menu; `None` when everything is closed
pub fn render_modals(modals: &ModalState) -> Option<String> {
    let open: Vec<&str> = [
        (modals.import_open, "Import window open"),
        (modals.search_info_open, "Search help open"),
        (modals.export_options_visible, "Export options shown"),
    ]
    .into_iter()
    .filter_map(|(visible, label)| visible.then_some(label))
    .collect();

    if open.is_empty() {
        None
    } else {
        Some(open.join("\n"))
    }
}

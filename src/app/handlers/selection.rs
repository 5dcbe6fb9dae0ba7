//! Handler für Auswahl, Sichtbarkeit und Host-Fokus.

use crate::app::controller::HostSelection;
use crate::app::OverlayState;

/// Blendet die Referenzen ein oder aus.
pub fn set_visible(state: &mut OverlayState, visible: bool) {
    state.references.set_visible(visible);
    log::debug!("Größenreferenzen sichtbar: {}", visible);
}

/// Wählt die vorherige Referenz aus.
pub fn select_previous(state: &mut OverlayState) -> anyhow::Result<()> {
    let index = state.references.select_previous()?;
    log_selection(state, index);
    Ok(())
}

/// Wählt die nächste Referenz aus.
pub fn select_next(state: &mut OverlayState) -> anyhow::Result<()> {
    let index = state.references.select_next()?;
    log_selection(state, index);
    Ok(())
}

/// Bittet den Host, die aktuelle Referenz zu selektieren und zu fokussieren.
pub fn focus_current(
    state: &mut OverlayState,
    host: Option<&mut Box<dyn HostSelection>>,
) -> anyhow::Result<()> {
    let item = state.references.current_item()?;
    match host {
        Some(host) => host.frame(item),
        None => log::info!("Fokus auf '{}' angefragt, kein Host verbunden", item.name()),
    }
    Ok(())
}

fn log_selection(state: &OverlayState, index: usize) {
    if let Ok(item) = state.references.current_item() {
        log::debug!("Referenz {} ausgewählt: {}", index, item.name());
    }
}

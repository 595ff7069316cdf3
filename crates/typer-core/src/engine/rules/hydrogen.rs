//! Hydrogen typing rules.
//!
//! Hydrogen types are resolved through the carbon they are bonded to: the
//! alkene and benzene rules confirm themselves only once that carbon's own
//! labels are visible. On early passes the carbon may still be unresolved,
//! in which case the rule simply does not fire and is re-evaluated on a
//! later pass.

use super::{ALKANE_H, ALKENE_C_H2, ALKENE_C_R2, ALKENE_C_RH, ALKENE_H, BENZENE_C, BENZENE_H};
use crate::core::models::element::ElementKind;
use crate::core::models::ids::AtomId;
use crate::engine::typer::Typer;

/// 140: alkane hydrogen.
pub(crate) fn alkane_h(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Carbon) == 1 {
        typer.whitelist(atom, ALKANE_H);
    }
}

/// 144: alkene hydrogen (H-C=).
pub(crate) fn alkene_h(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Carbon) == 1 {
        let Some(&carbon) = typer.graph().neighbors(atom).first() else {
            return;
        };
        // Make sure the carbon is a confirmed alkene carbon.
        if !typer
            .check_neighbor(carbon, &[ALKENE_C_R2, ALKENE_C_RH, ALKENE_C_H2])
            .is_empty()
        {
            typer.whitelist(atom, ALKENE_H);
            typer.blacklist(atom, &[ALKANE_H]);
        }
    }
}

/// 146: benzene hydrogen.
pub(crate) fn benzene_h(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Carbon) == 1 {
        let Some(&carbon) = typer.graph().neighbors(atom).first() else {
            return;
        };
        if !typer.check_neighbor(carbon, &[BENZENE_C]).is_empty() {
            typer.whitelist(atom, BENZENE_H);
            typer.blacklist(atom, &[ALKENE_H, ALKANE_H]);
        }
    }
}

//! Carbon typing rules.
//!
//! Rule identifiers and patterns follow the OPLS-aa alkane/alkene/aromatic
//! carbon families. Each successful match whitelists its own identifier and
//! blacklists the siblings in its structural family.

use super::{
    ALKANE_C, ALKANE_CH, ALKANE_CH2, ALKANE_CH3, ALKANE_CH4, ALKENE_C_H2, ALKENE_C_R2,
    ALKENE_C_RH, BENZENE_C, BIPHENYL_C1,
};
use crate::core::models::element::ElementKind;
use crate::core::models::ids::AtomId;
use crate::core::models::system::MoleculeGraph;
use crate::engine::rings::find_rings;
use crate::engine::typer::Typer;

/// 135: alkane CH3.
pub(crate) fn alkane_ch3(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Hydrogen) == 3
        && typer.neighbor_count(atom, ElementKind::Carbon) == 1
    {
        typer.whitelist(atom, ALKANE_CH3);
        typer.blacklist(atom, &[ALKANE_CH2, ALKANE_CH, ALKANE_CH4, ALKANE_C]);
    }
}

/// 136: alkane CH2.
pub(crate) fn alkane_ch2(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Hydrogen) == 2
        && typer.neighbor_count(atom, ElementKind::Carbon) == 2
    {
        typer.whitelist(atom, ALKANE_CH2);
        typer.blacklist(atom, &[ALKANE_CH3, ALKANE_CH, ALKANE_CH4, ALKANE_C]);
    }
}

/// 137: alkane CH.
pub(crate) fn alkane_ch(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Hydrogen) == 1
        && typer.neighbor_count(atom, ElementKind::Carbon) == 3
    {
        typer.whitelist(atom, ALKANE_CH);
        typer.blacklist(atom, &[ALKANE_CH3, ALKANE_CH2, ALKANE_CH4, ALKANE_C]);
    }
}

/// 138: alkane CH4 (methane).
pub(crate) fn alkane_ch4(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Hydrogen) == 4 {
        typer.whitelist(atom, ALKANE_CH4);
        typer.blacklist(atom, &[ALKANE_CH3, ALKANE_CH2, ALKANE_CH, ALKANE_C]);
    }
}

/// 139: quaternary alkane carbon.
pub(crate) fn alkane_c(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Carbon) == 4 {
        typer.whitelist(atom, ALKANE_C);
        typer.blacklist(atom, &[ALKANE_CH3, ALKANE_CH2, ALKANE_CH, ALKANE_CH4]);
    }
}

/// 141: alkene carbon, trisubstituted (R2-C=).
pub(crate) fn alkene_c_r2(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Carbon) == 3 {
        typer.whitelist(atom, ALKENE_C_R2);
        typer.blacklist(atom, &[ALKENE_C_RH, ALKENE_C_H2]);
    }
}

/// 142: alkene carbon, disubstituted (RH-C=).
pub(crate) fn alkene_c_rh(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Carbon) == 2
        && typer.neighbor_count(atom, ElementKind::Hydrogen) == 1
    {
        typer.whitelist(atom, ALKENE_C_RH);
        typer.blacklist(atom, &[ALKENE_C_R2, ALKENE_C_H2]);
    }
}

/// 143: alkene carbon, terminal (H2-C=).
pub(crate) fn alkene_c_h2(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Carbon) == 1
        && typer.neighbor_count(atom, ElementKind::Hydrogen) == 2
    {
        typer.whitelist(atom, ALKENE_C_H2);
        typer.blacklist(atom, &[ALKENE_C_R2, ALKENE_C_RH]);
    }
}

/// 145: benzene carbon.
///
/// The neighbor signature alone (2 C + 1 H) also matches a plain alkene
/// carbon, so membership in a hexagonal ring of 3-connected carbons is
/// required on top. Two ring entries mean one real ring, reported once per
/// traversal direction.
pub(crate) fn benzene_c(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Carbon) == 2
        && typer.neighbor_count(atom, ElementKind::Hydrogen) == 1
    {
        let search = find_rings(typer.graph(), atom, typer.config().aromatic_ring_size);
        if search.rings().len() == 2 && is_aromatic_ring(typer.graph(), &search.rings()[0]) {
            typer.whitelist(atom, BENZENE_C);
            // Blacklist the alkene carbons (also valence 3).
            typer.blacklist(atom, &[ALKENE_C_R2, ALKENE_C_RH, ALKENE_C_H2]);
        }
    }
}

/// 145B: biphenyl linking carbon (C1).
///
/// An aromatic ring member with three carbon neighbors whose out-of-ring
/// neighbor itself sits on an aromatic hexagon.
pub(crate) fn biphenyl_c1(typer: &mut Typer<'_>, atom: AtomId) {
    if typer.neighbor_count(atom, ElementKind::Carbon) != 3 {
        return;
    }
    let graph = typer.graph();
    let search = find_rings(graph, atom, typer.config().aromatic_ring_size);
    if search.rings().len() != 2 || !is_aromatic_ring(graph, &search.rings()[0]) {
        return;
    }

    let own_ring = &search.rings()[0];
    let links_second_ring = graph
        .neighbors(atom)
        .iter()
        .copied()
        .filter(|n| !own_ring.contains(n))
        .any(|neighbor| {
            let linked = find_rings(graph, neighbor, typer.config().aromatic_ring_size);
            linked.rings().len() == 2 && is_aromatic_ring(graph, &linked.rings()[0])
        });

    if links_second_ring {
        typer.whitelist(atom, BIPHENYL_C1);
        // Blacklist the alkene carbons (also valence 3).
        typer.blacklist(atom, &[ALKENE_C_R2, ALKENE_C_RH, ALKENE_C_H2]);
        // Blacklist the plain benzene carbon.
        typer.blacklist(atom, &[BENZENE_C]);
    }
}

/// Aromaticity proxy: every ring member is a carbon with exactly three
/// neighbors.
fn is_aromatic_ring(graph: &MoleculeGraph, ring: &[AtomId]) -> bool {
    ring.iter().all(|&member| {
        graph
            .atom(member)
            .is_some_and(|a| a.kind == ElementKind::Carbon)
            && graph.neighbors(member).len() == 3
    })
}

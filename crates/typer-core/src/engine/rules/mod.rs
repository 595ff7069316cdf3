//! # Typing Rules
//!
//! The declarative body of OPLS-aa pattern rules and the registry that
//! dispatches them.
//!
//! Every rule is a plain function keyed by its OPLS-aa identifier in an
//! explicit static table; no discovery by naming convention happens at
//! runtime. Rule evaluation order within a valence group is semantic: an
//! earlier match blacklists its structural siblings, which prevents later
//! rules in the same group from firing. The declared orders below must not
//! be changed or parallelized.

use crate::core::models::ids::AtomId;
use crate::engine::error::TyperError;
use crate::engine::typer::Typer;
use phf::phf_map;
use std::collections::HashMap;
use tracing::warn;

pub mod carbon;
pub mod hydrogen;

// OPLS-aa type identifiers covered by the rule set.
pub const ALKANE_CH3: &str = "135";
pub const ALKANE_CH2: &str = "136";
pub const ALKANE_CH: &str = "137";
pub const ALKANE_CH4: &str = "138";
pub const ALKANE_C: &str = "139";
pub const ALKANE_H: &str = "140";
pub const ALKENE_C_R2: &str = "141";
pub const ALKENE_C_RH: &str = "142";
pub const ALKENE_C_H2: &str = "143";
pub const ALKENE_H: &str = "144";
pub const BENZENE_C: &str = "145";
pub const BIPHENYL_C1: &str = "145B";
pub const BENZENE_H: &str = "146";

/// Human-readable descriptions per identifier, for diagnostics and display.
pub static RULE_DESCRIPTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "135" => "alkane CH3 carbon",
    "136" => "alkane CH2 carbon",
    "137" => "alkane CH carbon",
    "138" => "methane carbon",
    "139" => "quaternary alkane carbon",
    "140" => "alkane hydrogen",
    "141" => "trisubstituted alkene carbon (R2-C=)",
    "142" => "disubstituted alkene carbon (RH-C=)",
    "143" => "terminal alkene carbon (H2-C=)",
    "144" => "alkene hydrogen",
    "145" => "benzene carbon",
    "145B" => "biphenyl linking carbon",
    "146" => "benzene hydrogen",
};

/// Looks up the human-readable description for a type identifier.
pub fn describe(rule_id: &str) -> Option<&'static str> {
    RULE_DESCRIPTIONS.get(rule_id).copied()
}

/// Evaluation order for 4-valent (sp3) carbons.
pub(crate) const SP3_CARBON_RULES: &[&str] =
    &[ALKANE_CH3, ALKANE_CH2, ALKANE_CH, ALKANE_CH4, ALKANE_C];

/// Evaluation order for 3-valent (sp2/aromatic) carbons.
pub(crate) const SP2_CARBON_RULES: &[&str] = &[
    ALKENE_C_R2,
    ALKENE_C_RH,
    ALKENE_C_H2,
    BENZENE_C,
    BIPHENYL_C1,
];

/// Evaluation order for 1-valent hydrogens.
pub(crate) const HYDROGEN_RULES: &[&str] = &[ALKANE_H, ALKENE_H, BENZENE_H];

pub(crate) type RuleFn = for<'g> fn(&mut Typer<'g>, AtomId);

/// The static identifier-to-rule table the registry is built from.
const RULE_TABLE: &[(&str, RuleFn)] = &[
    (ALKANE_CH3, carbon::alkane_ch3),
    (ALKANE_CH2, carbon::alkane_ch2),
    (ALKANE_CH, carbon::alkane_ch),
    (ALKANE_CH4, carbon::alkane_ch4),
    (ALKANE_C, carbon::alkane_c),
    (ALKANE_H, hydrogen::alkane_h),
    (ALKENE_C_R2, carbon::alkene_c_r2),
    (ALKENE_C_RH, carbon::alkene_c_rh),
    (ALKENE_C_H2, carbon::alkene_c_h2),
    (ALKENE_H, hydrogen::alkene_h),
    (BENZENE_C, carbon::benzene_c),
    (BIPHENYL_C1, carbon::biphenyl_c1),
    (BENZENE_H, hydrogen::benzene_h),
];

/// Maps type identifiers to their rule functions.
///
/// Built once per typing run from [`RULE_TABLE`]; lookup of an identifier
/// with no entry is a construction defect surfaced as
/// [`TyperError::RuleNotImplemented`] by the dispatcher.
#[derive(Debug)]
pub(crate) struct RuleRegistry {
    rules: HashMap<&'static str, RuleFn>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: RULE_TABLE.iter().copied().collect(),
        }
    }

    pub fn get(&self, rule_id: &str) -> Option<RuleFn> {
        self.rules.get(rule_id).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

/// Dispatches a carbon atom to the rule group for its valence.
///
/// A carbon with 5 or more bonds violates the structural invariant and
/// aborts the run; valences with no rule group are diagnosed and skipped.
pub(crate) fn dispatch_carbon(typer: &mut Typer<'_>, atom: AtomId) -> Result<(), TyperError> {
    let valence = typer.graph().bond_count(atom);
    if valence >= 5 {
        return Err(typer.valence_error(atom, valence, 4));
    }

    match valence {
        4 => {
            for rule_id in SP3_CARBON_RULES {
                typer.run_rule(atom, rule_id)?;
            }
        }
        3 => {
            for rule_id in SP2_CARBON_RULES {
                typer.run_rule(atom, rule_id)?;
            }
        }
        _ => warn!(
            atom = typer.atom_name(atom),
            valence, "no rules for carbon with this valence"
        ),
    }
    Ok(())
}

/// Dispatches a hydrogen atom to the rule group for its valence.
///
/// A hydrogen with 2 or more bonds violates the structural invariant and
/// aborts the run.
pub(crate) fn dispatch_hydrogen(typer: &mut Typer<'_>, atom: AtomId) -> Result<(), TyperError> {
    let valence = typer.graph().bond_count(atom);
    if valence >= 2 {
        return Err(typer.valence_error(atom, valence, 1));
    }

    if valence == 1 {
        for rule_id in HYDROGEN_RULES {
            typer.run_rule(atom, rule_id)?;
        }
    } else {
        warn!(
            atom = typer.atom_name(atom),
            valence, "no rules for hydrogen with this valence"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_has_a_description() {
        for (rule_id, _) in RULE_TABLE {
            assert!(
                describe(rule_id).is_some(),
                "missing description for rule {rule_id}"
            );
        }
    }

    #[test]
    fn every_dispatch_order_entry_is_registered() {
        let registry = RuleRegistry::new();
        for rule_id in SP3_CARBON_RULES
            .iter()
            .chain(SP2_CARBON_RULES)
            .chain(HYDROGEN_RULES)
        {
            assert!(
                registry.get(rule_id).is_some(),
                "no rule registered for {rule_id}"
            );
        }
    }

    #[test]
    fn registry_has_no_duplicate_identifiers() {
        assert_eq!(RuleRegistry::new().len(), RULE_TABLE.len());
    }

    #[test]
    fn unknown_identifier_is_absent() {
        assert!(RuleRegistry::new().get("999").is_none());
        assert!(describe("999").is_none());
    }
}

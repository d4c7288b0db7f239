//! Three-way partition and guarded rendering
//!
//! The single reused building block of the engine: classify names
//! into common / docking-only / main-only, then render the classes as
//! unconditioned lines followed by one guarded block. Every category
//! driver goes through [`render_conditional`]; the drivers differ only
//! in how a classified item becomes text.

use crate::tables::DOCK_GUARD;
use imod_catalog::EnumGroup;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Three-way split of symbol names between the branches of one scope
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Names both branches declare
    pub shared: Vec<String>,
    /// Names only the docking branch declares
    pub docking_only: Vec<String>,
    /// Names only the main branch declares
    pub main_only: Vec<String>,
}

impl Partition {
    /// Partition two unordered name sets. Every class comes out
    /// lexicographically sorted.
    #[must_use]
    pub fn split_sets(main: &BTreeSet<String>, docking: &BTreeSet<String>) -> Self {
        Self {
            shared: main.intersection(docking).cloned().collect(),
            docking_only: docking.difference(main).cloned().collect(),
            main_only: main.difference(docking).cloned().collect(),
        }
    }

    /// Partition two ordered member lists. Each class keeps the
    /// declaring branch's source order; shared members follow the main
    /// branch's order.
    #[must_use]
    pub fn split_ordered(main: &[String], docking: &[String]) -> Self {
        let main_set: HashSet<&str> = main.iter().map(String::as_str).collect();
        let docking_set: HashSet<&str> = docking.iter().map(String::as_str).collect();

        Self {
            shared: main
                .iter()
                .filter(|name| docking_set.contains(name.as_str()))
                .cloned()
                .collect(),
            docking_only: docking
                .iter()
                .filter(|name| !main_set.contains(name.as_str()))
                .cloned()
                .collect(),
            main_only: main
                .iter()
                .filter(|name| !docking_set.contains(name.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// True when both branches declare exactly the same names, so no
    /// conditional markers are needed.
    #[inline]
    #[must_use]
    pub fn is_unanimous(&self) -> bool {
        self.docking_only.is_empty() && self.main_only.is_empty()
    }
}

/// Outer-level partition of enum groups by prefix.
///
/// Shared groups carry both branches' declarations so the member-level
/// reconciliation can compare their member lists.
#[derive(Debug)]
pub struct GroupPartition<'a> {
    /// Groups both branches declare, paired `(main, docking)`, in the
    /// main branch's declaration order
    pub shared: Vec<(&'a EnumGroup, &'a EnumGroup)>,
    /// Groups only the docking branch declares, in its order
    pub docking_only: Vec<&'a EnumGroup>,
    /// Groups only the main branch declares, in its order
    pub main_only: Vec<&'a EnumGroup>,
}

impl<'a> GroupPartition<'a> {
    /// Partition two branches' group lists by exact prefix match
    #[must_use]
    pub fn split(main: &'a [EnumGroup], docking: &'a [EnumGroup]) -> Self {
        let main_prefixes: HashSet<&str> = main.iter().map(|g| g.prefix.as_str()).collect();
        let docking_by_prefix: HashMap<&str, &EnumGroup> =
            docking.iter().map(|g| (g.prefix.as_str(), g)).collect();

        Self {
            shared: main
                .iter()
                .filter_map(|group| {
                    docking_by_prefix
                        .get(group.prefix.as_str())
                        .map(|counterpart| (group, *counterpart))
                })
                .collect(),
            docking_only: docking
                .iter()
                .filter(|group| !main_prefixes.contains(group.prefix.as_str()))
                .collect(),
            main_only: main
                .iter()
                .filter(|group| !docking_by_prefix.contains_key(group.prefix.as_str()))
                .collect(),
        }
    }
}

/// Append the conditional tail of a partition.
///
/// Docking-only items go inside `#ifdef IMGUI_HAS_DOCK`; main-only
/// items follow in the `#else` arm when a docking block is open,
/// otherwise inside `#ifndef IMGUI_HAS_DOCK`. The block closes with
/// `#endif` iff anything was guarded. Shared content is the caller's
/// business: it renders unconditioned, before this tail.
pub fn render_conditional<T>(
    out: &mut String,
    docking_only: &[T],
    main_only: &[T],
    mut emit: impl FnMut(&mut String, &T),
) {
    let has_docking = !docking_only.is_empty();
    if has_docking {
        out.push_str(&format!("#ifdef {DOCK_GUARD}\n"));
        for item in docking_only {
            emit(out, item);
        }
    }

    let has_main = !main_only.is_empty();
    if has_main {
        if has_docking {
            out.push_str("#else\n");
        } else {
            out.push_str(&format!("#ifndef {DOCK_GUARD}\n"));
        }
        for item in main_only {
            emit(out, item);
        }
    }

    if has_docking || has_main {
        out.push_str("#endif\n");
    }
}

/// Render a name partition as one forwarding line per name: shared
/// names unconditioned, then the guarded tail.
pub fn render_names(out: &mut String, partition: &Partition, line: impl Fn(&str) -> String) {
    for name in &partition.shared {
        out.push_str(&line(name));
    }
    render_conditional(
        out,
        &partition.docking_only,
        &partition.main_only,
        |out, name: &String| out.push_str(&line(name)),
    );
}

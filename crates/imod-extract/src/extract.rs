//! Symbol classification
//!
//! Turns the generator metadata into the seven per-branch catalogs.
//! Classification is mechanical; every special case consults the
//! static tables in [`crate::tables`].

use crate::error::ExtractError;
use crate::headers::HeaderSet;
use crate::metadata::{self, Definitions, StructsAndEnums, TypedefsDict};
use crate::tables::{
    DEFINITIONS_JSON, IMPL_DEFINITIONS_JSON, NAMESPACE_FUNC_EXCEPTIONS, NESTED_STRUCTS,
    PRIMITIVE_TYPES, STRUCTS_AND_ENUMS_JSON, TYPEDEFS_JSON, TYPE_IDENT_RE,
};
use imod_catalog::{BranchCatalogs, EnumCatalog, EnumGroup, Location, NameCatalog};
use std::path::PathBuf;
use tracing::debug;

/// Runs the full extraction against one checked-out branch
#[derive(Debug)]
pub struct Extractor {
    root: PathBuf,
}

impl Extractor {
    /// Create an extractor rooted at the directory containing `cimgui/`
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read the headers and metadata, classify every symbol, and
    /// return the branch's catalogs.
    ///
    /// # Errors
    /// Fails on unreadable inputs, on any symbol that cannot be
    /// attributed to a header, and on any backend argument type that
    /// cannot be reduced to a bare identifier.
    pub fn run(&self) -> Result<BranchCatalogs, ExtractError> {
        let headers = HeaderSet::load(&self.root)?;
        let structs_and_enums: StructsAndEnums =
            metadata::load(&self.root.join(STRUCTS_AND_ENUMS_JSON))?;
        let typedefs: TypedefsDict = metadata::load(&self.root.join(TYPEDEFS_JSON))?;
        let definitions: Definitions = metadata::load(&self.root.join(DEFINITIONS_JSON))?;
        let impl_definitions: Definitions =
            metadata::load(&self.root.join(IMPL_DEFINITIONS_JSON))?;

        let enums = extract_enums(&structs_and_enums)?;
        let structs = extract_structs(&structs_and_enums, &headers)?;
        let aliases = extract_aliases(&typedefs, &headers)?;
        let (funcs, funcs_in_namespace) = extract_functions(&definitions);
        let (impl_types, impl_funcs) = extract_backends(&impl_definitions)?;

        debug!(
            enums = enums.values().map(Vec::len).sum::<usize>(),
            structs = structs.values().map(std::collections::BTreeSet::len).sum::<usize>(),
            aliases = aliases.values().map(std::collections::BTreeSet::len).sum::<usize>(),
            "classified symbols"
        );

        Ok(BranchCatalogs {
            enums,
            structs,
            aliases,
            funcs,
            funcs_in_namespace,
            impl_types,
            impl_funcs,
        })
    }
}

/// Group enums by the location the generator recorded for their prefix.
///
/// Member order is source order and is preserved verbatim.
///
/// # Errors
/// Fails if a prefix has no recorded location.
pub fn extract_enums(metadata: &StructsAndEnums) -> Result<EnumCatalog, ExtractError> {
    let mut catalog = EnumCatalog::default();
    for (prefix, members) in &metadata.enums {
        let location = recorded_location(metadata, prefix)?;
        let names = members.iter().map(|m| m.name.clone()).collect();
        catalog
            .entry(location)
            .or_default()
            .push(EnumGroup::new(prefix.clone(), names));
    }
    Ok(catalog)
}

/// Collect struct names per location.
///
/// Plain structs use the generator's recorded locations; templated
/// structs are not in the locations map and fall back to header
/// substring attribution. Nested structs are skipped, they are
/// exported implicitly by their parent.
///
/// # Errors
/// Fails if a struct cannot be attributed to a header.
pub fn extract_structs(
    metadata: &StructsAndEnums,
    headers: &HeaderSet,
) -> Result<NameCatalog, ExtractError> {
    let mut catalog = NameCatalog::default();

    for name in metadata.structs.keys() {
        if NESTED_STRUCTS.contains(&name.as_str()) {
            continue;
        }
        let location = recorded_location(metadata, name)?;
        catalog.entry(location).or_default().insert(name.clone());
    }

    for name in metadata.templated_structs.keys() {
        if NESTED_STRUCTS.contains(&name.as_str()) {
            continue;
        }
        let location = headers.locate(name)?;
        catalog.entry(location).or_default().insert(name.clone());
    }

    Ok(catalog)
}

/// Collect type alias names per location.
///
/// An alias whose target is exactly `struct <alias>` is the
/// generator's C-compat spelling of a struct already covered by the
/// structs category and is skipped.
///
/// # Errors
/// Fails if an alias cannot be attributed to a header.
pub fn extract_aliases(
    typedefs: &TypedefsDict,
    headers: &HeaderSet,
) -> Result<NameCatalog, ExtractError> {
    let mut catalog = NameCatalog::default();
    for (alias, target) in typedefs {
        if *target == format!("struct {alias}") {
            continue;
        }
        let location = headers.locate(alias)?;
        catalog.entry(location).or_default().insert(alias.clone());
    }
    Ok(catalog)
}

/// Split free functions into global-scope and namespace catalogs.
///
/// Methods (non-empty `stname`) are skipped, they are exported
/// implicitly by their struct. Namespace membership is inferred from
/// the name: anything not starting with `Im` is called through the
/// `ImGui` namespace, with the static exception table overriding the
/// prefix rule.
#[must_use]
pub fn extract_functions(definitions: &Definitions) -> (NameCatalog, NameCatalog) {
    let mut funcs = NameCatalog::default();
    let mut funcs_in_namespace = NameCatalog::default();

    for definition in definitions.values().flatten() {
        if !definition.stname.is_empty() {
            continue;
        }
        let location = Location::from_generator(&definition.location);
        let name = &definition.funcname;
        if NAMESPACE_FUNC_EXCEPTIONS.contains(&name.as_str()) || !name.starts_with("Im") {
            funcs_in_namespace
                .entry(location)
                .or_default()
                .insert(name.clone());
        } else {
            funcs.entry(location).or_default().insert(name.clone());
        }
    }

    (funcs, funcs_in_namespace)
}

/// Collect backend function names and the type names their signatures
/// reference.
///
/// The generator does not catalog backend types, so they are recovered
/// from argument type texts; primitives are excluded.
///
/// # Errors
/// Fails if an argument's type text has no leading type identifier.
pub fn extract_backends(
    definitions: &Definitions,
) -> Result<(NameCatalog, NameCatalog), ExtractError> {
    let mut types = NameCatalog::default();
    let mut funcs = NameCatalog::default();

    for definition in definitions.values().flatten() {
        let location = Location::from_generator(&definition.location);

        for arg in &definition.args {
            let captures = TYPE_IDENT_RE.captures(&arg.ty).ok_or_else(|| {
                ExtractError::MalformedTypeSignature {
                    text: arg.ty.clone(),
                }
            })?;
            let type_name = &captures[1];
            if !PRIMITIVE_TYPES.contains(type_name) {
                types
                    .entry(location.clone())
                    .or_default()
                    .insert(type_name.to_string());
            }
        }

        if definition.stname.is_empty() {
            funcs
                .entry(location)
                .or_default()
                .insert(definition.funcname.clone());
        }
    }

    Ok((types, funcs))
}

fn recorded_location(
    metadata: &StructsAndEnums,
    symbol: &str,
) -> Result<Location, ExtractError> {
    metadata
        .locations
        .get(symbol)
        .map(|spelled| Location::from_generator(spelled))
        .ok_or_else(|| ExtractError::UnresolvedSymbol(symbol.to_string()))
}

//! Field-by-field decoding of the value tree into the project model.
//!
//! Each field is read through a [`Container`] with one of two policies:
//! [`Container::required`] fails with `MissingField` when the tag is absent,
//! and [`Container::optional`] yields `None` so the caller substitutes the
//! field's default. `null` counts as absent only for optional fields; a
//! required field holding `null` is a type mismatch.

use super::config::{DecoderConfig, UnknownTagPolicy};
use super::error::DecodeError;
use super::schema::{Field, file_path, project, project_options};
use super::value::WireValue;
use crate::label::BuildLabel;
use crate::path::{FileKind, FilePath};
use crate::project::{Project, ProjectOptions, defaults};
use crate::scheme::SchemeAutogenerationMode;
use crate::target::TargetId;
use crate::version::SemanticVersion;
use std::collections::{BTreeMap, BTreeSet};

/// Diagnostic name of the root container.
const ROOT: &str = "project";

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}.{name}")
    }
}

fn entry_path(parent: &str, key: &str) -> String {
    format!("{parent}[{key:?}]")
}

fn element_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// A value that can be read from the tree at a given field path.
pub(super) trait Decode: Sized {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError>;
}

/// A value usable as a map key.
pub(super) trait DecodeKey: Sized + Ord {
    fn decode_key(key: &str, field: &str) -> Result<Self, DecodeError>;
}

/// One object of the tree, addressed by tag.
pub(super) struct Container<'a> {
    path: &'a str,
    entries: &'a [(String, WireValue)],
    config: &'a DecoderConfig,
}

impl<'a> Container<'a> {
    /// Open `value` as a keyed container whose tags are drawn from `known`.
    ///
    /// Repeated tags are always rejected; tags outside `known` are rejected
    /// only under [`UnknownTagPolicy::Reject`].
    pub(super) fn open(
        value: &'a WireValue,
        path: &'a str,
        known: &[Field],
        config: &'a DecoderConfig,
    ) -> Result<Self, DecodeError> {
        let WireValue::Object(entries) = value else {
            return Err(DecodeError::type_mismatch(
                path,
                "keyed container",
                value,
            ));
        };
        let container_name = if path.is_empty() { ROOT } else { path };
        let mut seen = BTreeSet::new();
        for (tag, _) in entries {
            if !seen.insert(tag.as_str()) {
                return Err(DecodeError::DuplicateKey {
                    field: container_name.to_owned(),
                    key: tag.clone(),
                });
            }
            if config.unknown_tags == UnknownTagPolicy::Reject
                && !known.iter().any(|field| field.tag == tag.as_str())
            {
                return Err(DecodeError::UnknownField {
                    field: container_name.to_owned(),
                    tag: tag.clone(),
                });
            }
        }
        Ok(Self {
            path,
            entries,
            config,
        })
    }

    fn lookup(&self, field: Field) -> Option<&'a WireValue> {
        self.entries
            .iter()
            .find(|(tag, _)| tag.as_str() == field.tag)
            .map(|(_, value)| value)
    }

    /// Read a field whose absence is a decode failure.
    ///
    /// A present `null` is not absence: it reaches `T::decode`, which
    /// rejects it as a type mismatch.
    pub(super) fn required<T: Decode>(&self, field: Field) -> Result<T, DecodeError> {
        let path = child_path(self.path, field.name);
        match self.lookup(field) {
            Some(value) => T::decode(value, &path, self.config),
            None => Err(DecodeError::MissingField { field: path }),
        }
    }

    /// Read a field that may be absent. `null` counts as absent.
    pub(super) fn optional<T: Decode>(&self, field: Field) -> Result<Option<T>, DecodeError> {
        self.lookup(field)
            .filter(|value| !value.is_null())
            .map(|value| T::decode(value, &child_path(self.path, field.name), self.config))
            .transpose()
    }
}

impl Decode for String {
    fn decode(value: &WireValue, field: &str, _: &DecoderConfig) -> Result<Self, DecodeError> {
        match value {
            WireValue::String(s) => Ok(s.clone()),
            other => Err(DecodeError::type_mismatch(field, "string", other)),
        }
    }
}

impl Decode for bool {
    fn decode(value: &WireValue, field: &str, _: &DecoderConfig) -> Result<Self, DecodeError> {
        match value {
            WireValue::Bool(b) => Ok(*b),
            other => Err(DecodeError::type_mismatch(field, "boolean", other)),
        }
    }
}

impl Decode for u64 {
    fn decode(value: &WireValue, field: &str, _: &DecoderConfig) -> Result<Self, DecodeError> {
        match value {
            WireValue::Number(n) => n
                .as_u64()
                .ok_or_else(|| DecodeError::type_mismatch(field, "unsigned integer", value)),
            other => Err(DecodeError::type_mismatch(field, "unsigned integer", other)),
        }
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError> {
        let WireValue::Array(items) = value else {
            return Err(DecodeError::type_mismatch(field, "array", value));
        };
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| T::decode(item, &element_path(field, idx), config))
            .collect()
    }
}

impl<T: Decode + Ord> Decode for BTreeSet<T> {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError> {
        Vec::<T>::decode(value, field, config).map(|items| items.into_iter().collect())
    }
}

impl<K: DecodeKey, V: Decode> Decode for BTreeMap<K, V> {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError> {
        let WireValue::Object(entries) = value else {
            return Err(DecodeError::type_mismatch(field, "keyed map", value));
        };
        let mut map = Self::new();
        for (raw_key, raw_value) in entries {
            let key = K::decode_key(raw_key, field)?;
            let decoded = V::decode(raw_value, &entry_path(field, raw_key), config)?;
            if map.insert(key, decoded).is_some() {
                return Err(DecodeError::DuplicateKey {
                    field: field.to_owned(),
                    key: raw_key.clone(),
                });
            }
        }
        Ok(map)
    }
}

impl DecodeKey for String {
    fn decode_key(key: &str, _: &str) -> Result<Self, DecodeError> {
        Ok(key.to_owned())
    }
}

impl DecodeKey for TargetId {
    fn decode_key(key: &str, field: &str) -> Result<Self, DecodeError> {
        Self::new(key).map_err(|_| DecodeError::TypeMismatch {
            field: field.to_owned(),
            expected: "target identifier",
            found: format!("key {key:?}"),
        })
    }
}

impl Decode for TargetId {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError> {
        let text = String::decode(value, field, config)?;
        Self::new(text).map_err(|_| DecodeError::type_mismatch(field, "target identifier", value))
    }
}

impl Decode for BuildLabel {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError> {
        let text = String::decode(value, field, config)?;
        text.parse()
            .map_err(|source| DecodeError::MalformedLabel {
                field: field.to_owned(),
                value: text,
                source,
            })
    }
}

impl Decode for SemanticVersion {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError> {
        let text = String::decode(value, field, config)?;
        text.parse()
            .map_err(|source| DecodeError::MalformedVersion {
                field: field.to_owned(),
                value: text,
                source,
            })
    }
}

impl Decode for SchemeAutogenerationMode {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError> {
        String::decode(value, field, config)?
            .parse()
            .map_err(|_| DecodeError::type_mismatch(field, "one of `auto`, `none`, `all`", value))
    }
}

impl Decode for FileKind {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError> {
        let text = String::decode(value, field, config)?;
        Self::from_wire_str(&text)
            .ok_or_else(|| DecodeError::type_mismatch(field, "one of `p`, `e`, `g`, `i`", value))
    }
}

impl Decode for FilePath {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError> {
        if let WireValue::String(path) = value {
            return Ok(Self::project(path.as_str()));
        }
        let container = Container::open(value, field, file_path::ALL, config)?;
        let path: String = container.required(file_path::PATH)?;
        let kind = container.optional(file_path::KIND)?.unwrap_or_default();
        let decoded = Self::new(kind, path);
        Ok(if container.optional(file_path::IS_FOLDER)?.unwrap_or(false) {
            decoded.folder()
        } else {
            decoded
        })
    }
}

impl Decode for ProjectOptions {
    fn decode(value: &WireValue, field: &str, config: &DecoderConfig) -> Result<Self, DecodeError> {
        let container = Container::open(value, field, project_options::ALL, config)?;
        Ok(Self {
            development_region: container
                .optional(project_options::DEVELOPMENT_REGION)?
                .unwrap_or_else(|| defaults::DEVELOPMENT_REGION.to_owned()),
            indent_width: container.optional(project_options::INDENT_WIDTH)?,
            organization_name: container.optional(project_options::ORGANIZATION_NAME)?,
            tab_width: container.optional(project_options::TAB_WIDTH)?,
            uses_tabs: container.optional(project_options::USES_TABS)?,
        })
    }
}

/// Decode the root container. Fields are read in tag-table order, so the
/// first failing field in that order is the one reported.
pub(super) fn decode_project(root: &WireValue, config: &DecoderConfig) -> Result<Project, DecodeError> {
    if !matches!(root, WireValue::Object(_)) {
        return Err(DecodeError::NotAContainer {
            found: root.describe(),
        });
    }
    let container = Container::open(root, "", project::ALL, config)?;

    let name: String = container.required(project::NAME)?;
    if name.is_empty() {
        return Err(DecodeError::TypeMismatch {
            field: project::NAME.name.to_owned(),
            expected: "non-empty string",
            found: String::from("string \"\""),
        });
    }

    Ok(Project {
        name,
        options: container.optional(project::OPTIONS)?.unwrap_or_default(),
        build_tool_path: container
            .optional(project::BUILD_TOOL_PATH)?
            .unwrap_or_else(|| defaults::BUILD_TOOL.to_owned()),
        build_config: container.required(project::BUILD_CONFIG)?,
        ide_configurations: container
            .optional(project::IDE_CONFIGURATIONS)?
            .unwrap_or_else(defaults::ide_configurations),
        default_ide_configuration: container
            .optional(project::DEFAULT_IDE_CONFIGURATION)?
            .unwrap_or_else(|| defaults::CONFIGURATION.to_owned()),
        generator_label: container.required(project::GENERATOR_LABEL)?,
        runner_label: container.required(project::RUNNER_LABEL)?,
        minimum_tool_version: container.required(project::MINIMUM_TOOL_VERSION)?,
        targets: BTreeMap::new(),
        target_hosts: container
            .optional(project::TARGET_HOSTS)?
            .unwrap_or_default(),
        envs: container.optional(project::ENVS)?.unwrap_or_default(),
        args: container.optional(project::ARGS)?.unwrap_or_default(),
        extra_files: container.optional(project::EXTRA_FILES)?.unwrap_or_default(),
        scheme_autogeneration_mode: container
            .optional(project::SCHEME_AUTOGENERATION_MODE)?
            .unwrap_or_default(),
        custom_schemes: Vec::new(),
        force_dependency_linking: container
            .optional(project::FORCE_DEPENDENCY_LINKING)?
            .unwrap_or(defaults::FORCE_DEPENDENCY_LINKING),
        index_import_path: container.required(project::INDEX_IMPORT_PATH)?,
        pre_build_script: container.optional(project::PRE_BUILD_SCRIPT)?,
        post_build_script: container.optional(project::POST_BUILD_SCRIPT)?,
    })
}

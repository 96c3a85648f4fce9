// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of cibconf, released under the BSD 3-Clause License.

use crate::dto::CibNvset;
use crate::render::nvset::nvset_dto_list_to_lines;
use crate::render::{pairs_to_cmd, shell_quote};

/// Which defaults a listing or command refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultsKind {
    /// `rsc_defaults`
    Resource,
    /// `op_defaults`
    Operation,
}

impl DefaultsKind {
    fn command(self) -> &'static str {
        match self {
            DefaultsKind::Resource => "pcs resource defaults",
            DefaultsKind::Operation => "pcs resource op defaults",
        }
    }
}

/// Render resource or operation defaults.
///
/// Expired sets are shown only with `include_expired`.
///
pub fn defaults_to_text(nvsets: &[CibNvset], with_ids: bool, include_expired: bool) -> Vec<String> {
    let lines = nvset_dto_list_to_lines(nvsets, "Meta Attrs", with_ids, include_expired);
    if lines.is_empty() {
        vec!["No defaults set".to_string()]
    } else {
        lines
    }
}

/// Render one `pcs ... defaults set create` command per set.
pub fn defaults_to_cmd(kind: DefaultsKind, nvsets: &[CibNvset]) -> Vec<Vec<String>> {
    nvsets
        .iter()
        .map(|nvset| {
            let mut create = vec![
                format!("{} set create", kind.command()),
                shell_quote(&format!("id={}", nvset.id)).into_owned(),
            ];
            create.extend(pairs_to_cmd(
                nvset.options.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            ));

            let mut cmd = vec![create.join(" ")];
            if !nvset.nvpairs.is_empty() {
                cmd.push(format!("  meta {}", pairs_to_cmd(nvset.pairs()).join(" ")));
            }
            if let Some(rule) = &nvset.rule {
                cmd.push(format!("  rule {}", shell_quote(&rule.as_string)));
            }
            cmd
        })
        .collect()
}

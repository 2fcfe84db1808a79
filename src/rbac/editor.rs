//! Module-grouped permission editor
//!
//! Lets an authorized principal compose the desired permission set for a
//! target role, constrained by the principal's delegation authority. The
//! editor is a deterministic state machine:
//!
//! ```text
//! Closed → Loading → Open(editable | read-only) → Committing → Closed
//! ```
//!
//! Loading happens in [`super::RoleAdmin::open_editor`]; a load failure
//! never produces an editor instance, so `Open` is unreachable from a
//! partially initialized state. A failed commit returns to `Open` with the
//! working set intact so the operator can retry.

use super::authority::AuthoritySet;
use super::catalog::PermissionCatalog;
use super::types::{PermissionCode, Role};
use crate::utils::error::{ConsoleError, Result};
use std::collections::HashSet;

/// Editor lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Editable (or read-only) and accepting toggles
    Open,
    /// A commit is in flight; edits are refused until it resolves
    Committing,
    /// Finished; the instance is inert
    Closed,
}

/// Per-role permission editor instance
#[derive(Debug)]
pub struct PermissionEditor {
    role: Role,
    /// The role's persisted assignment at open time
    current: HashSet<PermissionCode>,
    /// The operator's working selection
    working: HashSet<PermissionCode>,
    authority: AuthoritySet,
    /// Module groups expanded in the UI; all collapsed by default
    expanded: HashSet<String>,
    read_only: bool,
    state: EditorState,
}

impl PermissionEditor {
    /// Construct an open editor. Only called once loading (current
    /// assignment + authority set) has fully succeeded.
    pub(crate) fn open(
        role: Role,
        current: Vec<PermissionCode>,
        authority: AuthoritySet,
        read_only: bool,
    ) -> Self {
        let current: HashSet<PermissionCode> = current.into_iter().collect();
        Self {
            role,
            working: current.clone(),
            current,
            authority,
            expanded: HashSet::new(),
            read_only,
            state: EditorState::Open,
        }
    }

    /// The role being edited
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Current lifecycle state
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Whether the principal is only a viewer of this role
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// The authority set this editor is constrained by
    pub fn authority(&self) -> &AuthoritySet {
        &self.authority
    }

    /// The operator's working selection
    pub fn working_set(&self) -> &HashSet<PermissionCode> {
        &self.working
    }

    /// Whether a code is currently selected
    pub fn is_selected(&self, code: &PermissionCode) -> bool {
        self.working.contains(code)
    }

    /// Whether a code is displayed as assigned-but-locked: selected but
    /// outside the principal's authority, so no toggle can touch it
    pub fn is_locked(&self, code: &PermissionCode) -> bool {
        self.working.contains(code) && !self.authority.contains(code)
    }

    fn accepts_edits(&self) -> bool {
        self.state == EditorState::Open && !self.read_only
    }

    /// Flip membership of one code in the working set.
    ///
    /// Strict no-op when the editor is read-only, a commit is in flight, or
    /// the code is outside the authority set: a non-delegable code is inert,
    /// never silently added or removed. Returns whether the state changed.
    pub fn toggle_code(&mut self, code: &PermissionCode) -> bool {
        if !self.accepts_edits() || !self.authority.contains(code) {
            return false;
        }

        if !self.working.remove(code) {
            self.working.insert(code.clone());
        }
        true
    }

    /// Bulk toggle over an arbitrary group of codes.
    ///
    /// If every delegable code in the group is selected, deselects them all;
    /// otherwise selects them all. Codes outside the authority set are left
    /// untouched either way. Module-scoped and catalog-scoped bulk actions
    /// both go through here. Returns the number of codes changed.
    pub fn toggle_group(&mut self, codes: &[PermissionCode]) -> usize {
        if !self.accepts_edits() {
            return 0;
        }

        let delegable: Vec<&PermissionCode> = codes
            .iter()
            .filter(|code| self.authority.contains(code))
            .collect();
        if delegable.is_empty() {
            return 0;
        }

        let all_selected = delegable.iter().all(|code| self.working.contains(*code));

        let mut changed = 0;
        for code in delegable {
            let did = if all_selected {
                self.working.remove(code)
            } else {
                self.working.insert(code.clone())
            };
            if did {
                changed += 1;
            }
        }
        changed
    }

    /// Bulk toggle one module's codes
    pub fn toggle_module(&mut self, catalog: &PermissionCatalog, module: &str) -> usize {
        let codes = catalog.codes_in_module(module);
        self.toggle_group(&codes)
    }

    /// Bulk toggle the full catalog
    pub fn toggle_all(&mut self, catalog: &PermissionCatalog) -> usize {
        let codes = catalog.codes();
        self.toggle_group(&codes)
    }

    /// Expand or collapse a module group in the UI
    pub fn toggle_module_expanded(&mut self, module: &str) {
        if !self.expanded.remove(module) {
            self.expanded.insert(module.to_string());
        }
    }

    /// Whether a module group is expanded
    pub fn is_module_expanded(&self, module: &str) -> bool {
        self.expanded.contains(module)
    }

    /// The set that a commit would persist:
    /// `(working ∩ authority) ∪ (current ∖ authority)`.
    ///
    /// Codes outside the principal's authority pass through unchanged from
    /// whatever the role already had; the principal can neither strip nor
    /// add them merely because they are visible on the same screen.
    pub fn desired_set(&self) -> HashSet<PermissionCode> {
        let mut desired: HashSet<PermissionCode> = self
            .working
            .iter()
            .filter(|code| self.authority.contains(code))
            .cloned()
            .collect();
        desired.extend(
            self.current
                .iter()
                .filter(|code| !self.authority.contains(code))
                .cloned(),
        );
        desired
    }

    /// Transition to `Committing` and hand back the set to submit.
    /// Rejected for read-only editors and outside `Open`.
    pub(crate) fn begin_commit(&mut self) -> Result<Vec<PermissionCode>> {
        if self.read_only {
            return Err(ConsoleError::authorization(
                "Editor is read-only; viewer principals cannot commit",
            ));
        }
        match self.state {
            EditorState::Open => {}
            EditorState::Committing => {
                return Err(ConsoleError::editor_state("A commit is already in flight"));
            }
            EditorState::Closed => {
                return Err(ConsoleError::editor_state("Editor is closed"));
            }
        }

        self.state = EditorState::Committing;
        // Deterministic payload order for the wire
        let mut codes: Vec<PermissionCode> = self.desired_set().into_iter().collect();
        codes.sort();
        Ok(codes)
    }

    /// The commit persisted; the instance is done
    pub(crate) fn commit_succeeded(&mut self) {
        self.state = EditorState::Closed;
    }

    /// The commit was rejected; reopen with the working set untouched so
    /// the operator can retry
    pub(crate) fn commit_failed(&mut self) {
        self.state = EditorState::Open;
    }

    /// Close the editor, discarding the working set. No effect while a
    /// commit is in flight; returns whether the editor is now closed.
    pub fn close(&mut self) -> bool {
        if self.state == EditorState::Committing {
            return false;
        }
        self.state = EditorState::Closed;
        true
    }
}

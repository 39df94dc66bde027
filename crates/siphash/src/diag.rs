//! Optional diagnostics for backend selection.
//!
//! This module is behind `cfg(feature = "diag")` and is intended for
//! explainable selection without affecting normal builds.

use crate::{
  config::{self, SelectionReason, SipHashForce},
  kernels::{self, SipHashKernelId},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SipHashSelectionDiag {
  pub requested_force: SipHashForce,
  pub build_default: Option<SipHashKernelId>,
  pub selected_kernel: &'static str,
  pub limb_bits: &'static [u32],
  pub reason: SelectionReason,
  pub available: &'static [SipHashKernelId],
}

#[must_use]
pub fn selection_diag() -> SipHashSelectionDiag {
  let cfg = config::get();
  SipHashSelectionDiag {
    requested_force: cfg.requested_force,
    build_default: config::build_default(),
    selected_kernel: cfg.effective_kernel.as_str(),
    limb_bits: cfg.effective_kernel.limb_bits(),
    reason: cfg.reason,
    available: kernels::ALL,
  }
}

//! SipHash backend configuration (build-time default + env override).
//!
//! The arithmetic backend never changes a digest, only how 64-bit words are
//! represented while computing it. Selection order:
//! - `SIPHASH_FORCE` (with `std`), unless unset, empty, unrecognized or `auto`
//! - the narrowest `force-split*` Cargo feature enabled at build time
//! - [`SipHashKernelId::Native`]

use crate::kernels::{SipHashKernelId, id_from_name};

/// Forced backend selection for SipHash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SipHashForce {
  /// Use the build-time default.
  #[default]
  Auto,
  /// Single `u64` words.
  Native,
  /// Two 32-bit limbs.
  Split32,
  /// 24/24/16-bit limbs.
  Split24,
  /// Four 16-bit limbs.
  Split16,
}

impl SipHashForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Native => "native",
      Self::Split32 => "split32",
      Self::Split24 => "split24",
      Self::Split16 => "split16",
    }
  }

  /// Kernel this mode pins, or `None` for [`SipHashForce::Auto`].
  #[must_use]
  pub const fn kernel(self) -> Option<SipHashKernelId> {
    match self {
      Self::Auto => None,
      Self::Native => Some(SipHashKernelId::Native),
      Self::Split32 => Some(SipHashKernelId::Split32),
      Self::Split24 => Some(SipHashKernelId::Split24),
      Self::Split16 => Some(SipHashKernelId::Split16),
    }
  }

  #[must_use]
  pub const fn from_kernel(id: SipHashKernelId) -> Self {
    match id {
      SipHashKernelId::Native => Self::Native,
      SipHashKernelId::Split32 => Self::Split32,
      SipHashKernelId::Split24 => Self::Split24,
      SipHashKernelId::Split16 => Self::Split16,
    }
  }

  /// Parse a force value. Empty or unrecognized input yields `None`.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    id_from_name(value).map(Self::from_kernel)
  }
}

/// Where the effective kernel came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// No override; native words.
  Default,
  /// A `force-split*` Cargo feature.
  BuildFeature,
  /// The `SIPHASH_FORCE` environment variable.
  Environment,
}

impl SelectionReason {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Default => "default",
      Self::BuildFeature => "build-feature",
      Self::Environment => "environment",
    }
  }
}

/// Full SipHash configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SipHashConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: SipHashForce,
  /// Kernel that will run.
  pub effective_kernel: SipHashKernelId,
  /// Why `effective_kernel` was chosen.
  pub reason: SelectionReason,
}

/// Backend chosen by Cargo features alone.
#[must_use]
pub const fn build_default() -> Option<SipHashKernelId> {
  if cfg!(feature = "force-split16") {
    Some(SipHashKernelId::Split16)
  } else if cfg!(feature = "force-split24") {
    Some(SipHashKernelId::Split24)
  } else if cfg!(feature = "force-split32") {
    Some(SipHashKernelId::Split32)
  } else {
    None
  }
}

/// Resolve a requested force mode against the build-time default.
#[must_use]
pub const fn resolve(requested: SipHashForce) -> SipHashConfig {
  let (effective_kernel, reason) = match requested.kernel() {
    Some(id) => (id, SelectionReason::Environment),
    None => match build_default() {
      Some(id) => (id, SelectionReason::BuildFeature),
      None => (SipHashKernelId::Native, SelectionReason::Default),
    },
  };
  SipHashConfig {
    requested_force: requested,
    effective_kernel,
    reason,
  }
}

#[cfg(feature = "std")]
fn read_env_overrides() -> SipHashForce {
  std::env::var("SIPHASH_FORCE")
    .ok()
    .and_then(|v| SipHashForce::parse(&v))
    .unwrap_or(SipHashForce::Auto)
}

#[cfg(feature = "std")]
fn overrides() -> SipHashForce {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<SipHashForce> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> SipHashForce {
  SipHashForce::Auto
}

/// Current configuration. The environment is read once per process.
#[must_use]
pub fn get() -> SipHashConfig {
  resolve(overrides())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_names_and_aliases() {
    assert_eq!(SipHashForce::parse("auto"), Some(SipHashForce::Auto));
    assert_eq!(SipHashForce::parse("AUTO"), Some(SipHashForce::Auto));
    assert_eq!(SipHashForce::parse("native"), Some(SipHashForce::Native));
    assert_eq!(SipHashForce::parse("u64"), Some(SipHashForce::Native));
    assert_eq!(SipHashForce::parse(" split32\n"), Some(SipHashForce::Split32));
    assert_eq!(SipHashForce::parse("u24x3"), Some(SipHashForce::Split24));
    assert_eq!(SipHashForce::parse("Split16"), Some(SipHashForce::Split16));
  }

  #[test]
  fn parse_rejects_empty_and_unknown() {
    assert_eq!(SipHashForce::parse(""), None);
    assert_eq!(SipHashForce::parse("   "), None);
    assert_eq!(SipHashForce::parse("simd"), None);
  }

  #[test]
  fn as_str_round_trips() {
    for force in [
      SipHashForce::Auto,
      SipHashForce::Native,
      SipHashForce::Split32,
      SipHashForce::Split24,
      SipHashForce::Split16,
    ] {
      assert_eq!(SipHashForce::parse(force.as_str()), Some(force));
    }
  }

  #[test]
  fn forced_mode_wins() {
    let cfg = resolve(SipHashForce::Split24);
    assert_eq!(cfg.effective_kernel, SipHashKernelId::Split24);
    assert_eq!(cfg.reason, SelectionReason::Environment);
    assert_eq!(cfg.requested_force, SipHashForce::Split24);
  }

  #[test]
  fn auto_falls_back_to_build_default() {
    let cfg = resolve(SipHashForce::Auto);
    match build_default() {
      Some(id) => {
        assert_eq!(cfg.effective_kernel, id);
        assert_eq!(cfg.reason, SelectionReason::BuildFeature);
      }
      None => {
        assert_eq!(cfg.effective_kernel, SipHashKernelId::Native);
        assert_eq!(cfg.reason, SelectionReason::Default);
      }
    }
  }

  #[test]
  fn get_is_stable() {
    assert_eq!(get(), get());
  }
}

//! Backend introspection.
//!
//! ```
//! use siphash::introspect::{DispatchInfo, backend_name};
//!
//! let info = DispatchInfo::current();
//! println!("{info}");
//! assert_eq!(info.kernel().as_str(), backend_name());
//! ```

use core::fmt;

use crate::{
  config::{self, SipHashConfig},
  dispatch,
  kernels::SipHashKernelId,
};

/// Snapshot of the active backend and why it was chosen.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DispatchInfo {
  kernel: SipHashKernelId,
  config: SipHashConfig,
}

impl DispatchInfo {
  #[inline]
  #[must_use]
  pub fn current() -> Self {
    Self {
      kernel: dispatch::kernel_id(),
      config: config::get(),
    }
  }

  #[inline]
  #[must_use]
  pub fn kernel(&self) -> SipHashKernelId {
    self.kernel
  }

  #[inline]
  #[must_use]
  pub fn config(&self) -> SipHashConfig {
    self.config
  }
}

impl fmt::Display for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "siphash-2-4/{} (limbs ", self.kernel.as_str())?;
    for (i, bits) in self.kernel.limb_bits().iter().enumerate() {
      if i > 0 {
        f.write_str("+")?;
      }
      write!(f, "{bits}")?;
    }
    write!(
      f,
      ", {}, force={})",
      self.config.reason.as_str(),
      self.config.requested_force.as_str()
    )
  }
}

impl fmt::Debug for DispatchInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DispatchInfo")
      .field("kernel", &self.kernel.as_str())
      .field("reason", &self.config.reason)
      .field("requested_force", &self.config.requested_force)
      .finish()
  }
}

/// Name of the backend every [`crate::hash`] call runs on.
#[inline]
#[must_use]
pub fn backend_name() -> &'static str {
  dispatch::kernel_name()
}

//! Permissions passed to `System.Contract.Call`.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Flags restricting what a called contract may do.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CallFlags: u8 {
        const NONE = 0b0000_0000;
        /// The callee may read states.
        const READ_STATES = 0b0000_0001;
        /// The callee may write states.
        const WRITE_STATES = 0b0000_0010;
        /// The callee may invoke another contract.
        const ALLOW_CALL = 0b0000_0100;
        /// The callee may publish notifications.
        const ALLOW_NOTIFY = 0b0000_1000;
    }
}

impl CallFlags {
    pub const STATES: CallFlags = CallFlags::READ_STATES.union(CallFlags::WRITE_STATES);
    pub const READ_ONLY: CallFlags = CallFlags::READ_STATES.union(CallFlags::ALLOW_CALL);
    pub const ALL: CallFlags = CallFlags::STATES
        .union(CallFlags::ALLOW_CALL)
        .union(CallFlags::ALLOW_NOTIFY);

    const NAMED: [(CallFlags, &'static str); 4] = [
        (CallFlags::READ_STATES, "ReadStates"),
        (CallFlags::WRITE_STATES, "WriteStates"),
        (CallFlags::ALLOW_CALL, "AllowCall"),
        (CallFlags::ALLOW_NOTIFY, "AllowNotify"),
    ];
}

impl fmt::Display for CallFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let combined = [
            (Self::NONE, "None"),
            (Self::ALL, "All"),
            (Self::STATES, "States"),
            (Self::READ_ONLY, "ReadOnly"),
        ];
        if let Some((_, name)) = combined.iter().find(|(flags, _)| flags == self) {
            return f.write_str(name);
        }

        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join(", "))
    }
}

//! Interop services reachable through `SYSCALL`.

use sha2::{Digest, Sha256};
use std::fmt;

macro_rules! interop_services {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A syscall exposed by the Neo runtime.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum InteropService {
            $($variant),+
        }

        impl InteropService {
            /// Every known service.
            pub const ALL: &'static [InteropService] = &[$(InteropService::$variant),+];

            /// Dotted service name, e.g. `System.Crypto.CheckSig`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(InteropService::$variant => $name),+
                }
            }
        }
    };
}

interop_services! {
    CryptoCheckSig => "System.Crypto.CheckSig",
    CryptoCheckMultisig => "System.Crypto.CheckMultisig",
    ContractCall => "System.Contract.Call",
    ContractCallNative => "System.Contract.CallNative",
    ContractGetCallFlags => "System.Contract.GetCallFlags",
    ContractCreateStandardAccount => "System.Contract.CreateStandardAccount",
    ContractCreateMultisigAccount => "System.Contract.CreateMultisigAccount",
    ContractNativeOnPersist => "System.Contract.NativeOnPersist",
    ContractNativePostPersist => "System.Contract.NativePostPersist",
    IteratorNext => "System.Iterator.Next",
    IteratorValue => "System.Iterator.Value",
    RuntimePlatform => "System.Runtime.Platform",
    RuntimeGetNetwork => "System.Runtime.GetNetwork",
    RuntimeGetAddressVersion => "System.Runtime.GetAddressVersion",
    RuntimeGetTrigger => "System.Runtime.GetTrigger",
    RuntimeGetTime => "System.Runtime.GetTime",
    RuntimeGetScriptContainer => "System.Runtime.GetScriptContainer",
    RuntimeGetExecutingScriptHash => "System.Runtime.GetExecutingScriptHash",
    RuntimeGetCallingScriptHash => "System.Runtime.GetCallingScriptHash",
    RuntimeGetEntryScriptHash => "System.Runtime.GetEntryScriptHash",
    RuntimeCheckWitness => "System.Runtime.CheckWitness",
    RuntimeGetInvocationCounter => "System.Runtime.GetInvocationCounter",
    RuntimeGetRandom => "System.Runtime.GetRandom",
    RuntimeLog => "System.Runtime.Log",
    RuntimeNotify => "System.Runtime.Notify",
    RuntimeGetNotifications => "System.Runtime.GetNotifications",
    RuntimeGasLeft => "System.Runtime.GasLeft",
    RuntimeBurnGas => "System.Runtime.BurnGas",
    RuntimeCurrentSigners => "System.Runtime.CurrentSigners",
    StorageGetContext => "System.Storage.GetContext",
    StorageGetReadOnlyContext => "System.Storage.GetReadOnlyContext",
    StorageAsReadOnly => "System.Storage.AsReadOnly",
    StorageGet => "System.Storage.Get",
    StorageFind => "System.Storage.Find",
    StoragePut => "System.Storage.Put",
    StorageDelete => "System.Storage.Delete",
}

impl InteropService {
    /// The 4 bytes following `SYSCALL`: the first 4 bytes of SHA-256 over the name.
    pub fn hash(&self) -> [u8; 4] {
        hash_syscall(self.name())
    }

    /// The syscall hash read as a little-endian `u32`.
    pub fn hash_u32(&self) -> u32 {
        u32::from_le_bytes(self.hash())
    }

    /// Hex form of [`hash`](Self::hash).
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|service| service.name() == name)
    }

    pub fn from_hash(hash: [u8; 4]) -> Option<Self> {
        Self::ALL.iter().copied().find(|service| service.hash() == hash)
    }
}

/// Syscall hash of an arbitrary service name.
pub fn hash_syscall(name: &str) -> [u8; 4] {
    let digest = Sha256::digest(name.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

impl fmt::Display for InteropService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_hashes() {
        assert_eq!(InteropService::CryptoCheckSig.hash_hex(), "56e7b327");
        assert_eq!(InteropService::CryptoCheckMultisig.hash_hex(), "9ed0dc3a");
        assert_eq!(InteropService::ContractCall.hash_hex(), "627d5b52");
        assert_eq!(InteropService::CryptoCheckSig.hash_u32(), 0x27b3e756);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            InteropService::from_name("System.Runtime.CheckWitness"),
            Some(InteropService::RuntimeCheckWitness)
        );
        assert_eq!(InteropService::from_name("System.Runtime.Nope"), None);
        assert_eq!(
            InteropService::from_hash([0x62, 0x7d, 0x5b, 0x52]),
            Some(InteropService::ContractCall)
        );
    }

    #[test]
    fn test_hashes_are_unique() {
        let hashes: HashSet<[u8; 4]> = InteropService::ALL.iter().map(|s| s.hash()).collect();
        assert_eq!(hashes.len(), InteropService::ALL.len());
    }
}

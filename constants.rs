//! Namespaces, RPC defaults and known discriminator values.

/// Namespace Anchor hashes account struct names under
pub const ACCOUNT_NAMESPACE: &str = "account";

/// Namespace Anchor hashes instruction handler names under
pub const INSTRUCTION_NAMESPACE: &str = "global";

/// Namespace Anchor hashes event struct names under
pub const EVENT_NAMESPACE: &str = "event";

/// Length in bytes of every discriminator
pub const DISCRIMINATOR_LEN: usize = 8;

/// Public mainnet-beta endpoint used when no RPC URL is configured
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Commitment level requested when none is configured
pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the RPC URL
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Environment variable overriding the commitment level
pub const RPC_COMMITMENT_ENV: &str = "RPC_COMMITMENT";

/// Raydium CP-swap `PoolState` account discriminator, sha256("account:PoolState")[..8].
/// Rendered in Base58 as `iUE1qg7KXeV`, the value used in `getProgramAccounts`
/// memcmp filters against the CP-swap program.
pub const POOL_STATE_DISCRIMINATOR: [u8; 8] = [0xf7, 0xed, 0xe3, 0xf5, 0xd7, 0xc3, 0xde, 0x46];

/// Jupiter Order Engine `fill` instruction discriminator, sha256("global:fill")[..8]
pub const FILL_DISCRIMINATOR: [u8; 8] = [0xa8, 0x60, 0xb7, 0xa3, 0x5c, 0x0a, 0x28, 0xa0];

//! Authorization Module for the voting contracts
//!
//! Role-based access control shared by every voting registry.
//!
//! ## Features
//! - A single contract admin (the deploying "root" account)
//! - Registrars who may assign voting power on the admin's behalf
//! - Explicit permission checks for privileged operations
//! - Events for every role change

#![no_std]

use soroban_sdk::{contracttype, Address, Env, IntoVal, Symbol, Val};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// Role entries must outlive the proposals and weights they govern.
// At ~5s per ledger: 30 days ≈ 518,400 ledgers, 1 year ≈ 6,307,200 ledgers.
const ROLE_TTL_THRESHOLD: u32 = 518_400;
const ROLE_TTL_EXTEND_TO: u32 = 6_307_200;

/// Role definitions
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Role {
    /// Root administrator with full access
    Admin,
    /// Account allowed to assign voting power
    Registrar,
    /// Regular account
    User,
}

/// Storage keys for role assignments
#[contracttype]
#[derive(Clone)]
pub enum RoleKey {
    /// Maps Address -> Role
    UserRole(Address),
    /// Contract-level admin address
    ContractAdmin,
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    Unauthorized,
    NotInitialized,
    AlreadyInitialized,
}

impl Role {
    /// Check if this role may assign voting power
    pub fn can_set_voting_power(&self) -> bool {
        matches!(self, Role::Admin | Role::Registrar)
    }
}

/// Initialize contract admin (call once during contract initialization)
pub fn initialize_admin(env: &Env, admin: &Address) -> Result<(), AuthError> {
    if env.storage().persistent().has(&RoleKey::ContractAdmin) {
        return Err(AuthError::AlreadyInitialized);
    }
    admin.require_auth();

    set_role_entry(env, &RoleKey::ContractAdmin, admin);
    set_role_entry(env, &RoleKey::UserRole(admin.clone()), &Role::Admin);

    Ok(())
}

/// Write a role entry and extend its TTL
fn set_role_entry<V: IntoVal<Env, Val>>(env: &Env, key: &RoleKey, value: &V) {
    env.storage().persistent().set(key, value);
    bump_role_entry(env, key);
}

fn bump_role_entry(env: &Env, key: &RoleKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, ROLE_TTL_THRESHOLD, ROLE_TTL_EXTEND_TO);
}

/// Get the contract admin address
pub fn get_admin(env: &Env) -> Result<Address, AuthError> {
    env.storage()
        .persistent()
        .get(&RoleKey::ContractAdmin)
        .ok_or(AuthError::NotInitialized)
}

/// Hand the admin role to `new_admin`; the previous admin drops to `User`.
pub fn transfer_admin(env: &Env, new_admin: &Address) -> Result<Address, AuthError> {
    let admin = get_admin(env)?;
    admin.require_auth();

    set_role_entry(env, &RoleKey::ContractAdmin, new_admin);
    set_role_entry(env, &RoleKey::UserRole(admin.clone()), &Role::User);
    set_role_entry(env, &RoleKey::UserRole(new_admin.clone()), &Role::Admin);

    env.events().publish(
        (Symbol::new(env, "admin_transferred"),),
        (admin.clone(), new_admin.clone()),
    );

    Ok(admin)
}

/// Grant a role to an address (admin only)
pub fn grant_role(env: &Env, caller: &Address, target: &Address, role: Role) -> Result<(), AuthError> {
    verify_and_require_admin(env, caller)?;

    // The admin seat moves only through transfer_admin
    if role == Role::Admin || target == &get_admin(env)? {
        return Err(AuthError::Unauthorized);
    }

    set_role_entry(env, &RoleKey::UserRole(target.clone()), &role);

    env.events().publish(
        (Symbol::new(env, "role_granted"), target.clone(), role),
        caller.clone(),
    );

    Ok(())
}

/// Revoke a role from an address (admin only)
pub fn revoke_role(env: &Env, caller: &Address, target: &Address) -> Result<(), AuthError> {
    verify_and_require_admin(env, caller)?;

    // Prevent admin from revoking their own role
    if caller == target {
        return Err(AuthError::Unauthorized);
    }

    set_role_entry(env, &RoleKey::UserRole(target.clone()), &Role::User);

    env.events().publish(
        (Symbol::new(env, "role_revoked"), target.clone()),
        caller.clone(),
    );

    Ok(())
}

/// Get the role of an address
pub fn get_role(env: &Env, address: &Address) -> Role {
    env.storage()
        .persistent()
        .get(&RoleKey::UserRole(address.clone()))
        .unwrap_or(Role::User)
}

/// Check if an address has a specific role
pub fn has_role(env: &Env, address: &Address, required_role: Role) -> bool {
    get_role(env, address) == required_role
}

/// Require admin privileges
pub fn require_admin(env: &Env, address: &Address) -> Result<(), AuthError> {
    let admin = get_admin(env)?;
    if &admin == address {
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}

/// Verify the caller's identity, then require admin privileges
pub fn verify_and_require_admin(env: &Env, caller: &Address) -> Result<(), AuthError> {
    caller.require_auth();
    require_admin(env, caller)
}

/// Verify identity and check permission
pub fn verify_and_check_permission<F>(
    env: &Env,
    caller: &Address,
    permission_check: F,
) -> Result<(), AuthError>
where
    F: Fn(&Role) -> bool,
{
    caller.require_auth();

    // Uninitialized contracts have no authority at all
    get_admin(env)?;

    let role = get_role(env, caller);
    if permission_check(&role) {
        bump_role_entry(env, &RoleKey::ContractAdmin);
        bump_role_entry(env, &RoleKey::UserRole(caller.clone()));
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}

/// Require permission to assign voting power
pub fn require_voting_power_authority(env: &Env, caller: &Address) -> Result<(), AuthError> {
    verify_and_check_permission(env, caller, Role::can_set_voting_power)
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::testutils::{Address as _, Ledger};
    use soroban_sdk::{contract, contractimpl};

    #[contract]
    pub struct Host;

    #[contractimpl]
    impl Host {
        pub fn ping() -> u32 {
            1
        }
    }

    struct Setup {
        env: Env,
        host: Address,
        admin: Address,
    }

    impl Setup {
        fn new() -> Self {
            let env = Env::default();
            env.mock_all_auths();
            let host = env.register(Host, ());
            let admin = Address::generate(&env);
            Self { env, host, admin }
        }

        fn initialized() -> Self {
            let setup = Self::new();
            assert_eq!(setup.run(|env| initialize_admin(env, &setup.admin)), Ok(()));
            setup
        }

        // Each call runs in its own contract frame
        fn run<T>(&self, f: impl FnOnce(&Env) -> T) -> T {
            self.env.as_contract(&self.host, || f(&self.env))
        }
    }

    #[test]
    fn test_initialize_admin_once() {
        let s = Setup::initialized();

        assert_eq!(s.run(|env| get_admin(env)), Ok(s.admin.clone()));
        assert!(s.run(|env| has_role(env, &s.admin, Role::Admin)));
        assert_eq!(
            s.run(|env| initialize_admin(env, &s.admin)),
            Err(AuthError::AlreadyInitialized)
        );
    }

    #[test]
    fn test_uninitialized_has_no_authority() {
        let s = Setup::new();

        assert_eq!(s.run(|env| get_admin(env)), Err(AuthError::NotInitialized));
        assert_eq!(
            s.run(|env| require_voting_power_authority(env, &s.admin)),
            Err(AuthError::NotInitialized)
        );
    }

    #[test]
    fn test_registrar_can_set_power_until_revoked() {
        let s = Setup::initialized();
        let registrar = Address::generate(&s.env);

        assert_eq!(
            s.run(|env| require_voting_power_authority(env, &registrar)),
            Err(AuthError::Unauthorized)
        );

        assert_eq!(
            s.run(|env| grant_role(env, &s.admin, &registrar, Role::Registrar)),
            Ok(())
        );
        assert_eq!(s.run(|env| require_voting_power_authority(env, &registrar)), Ok(()));

        assert_eq!(s.run(|env| revoke_role(env, &s.admin, &registrar)), Ok(()));
        assert_eq!(s.run(|env| get_role(env, &registrar)), Role::User);
        assert_eq!(
            s.run(|env| require_voting_power_authority(env, &registrar)),
            Err(AuthError::Unauthorized)
        );
    }

    #[test]
    fn test_admin_seat_not_grantable() {
        let s = Setup::initialized();
        let other = Address::generate(&s.env);

        assert_eq!(
            s.run(|env| grant_role(env, &s.admin, &other, Role::Admin)),
            Err(AuthError::Unauthorized)
        );
        assert_eq!(
            s.run(|env| revoke_role(env, &s.admin, &s.admin)),
            Err(AuthError::Unauthorized)
        );
    }

    #[test]
    fn test_grant_cannot_demote_admin() {
        let s = Setup::initialized();

        assert_eq!(
            s.run(|env| grant_role(env, &s.admin, &s.admin, Role::Registrar)),
            Err(AuthError::Unauthorized)
        );
        assert!(s.run(|env| has_role(env, &s.admin, Role::Admin)));
    }

    #[test]
    fn test_role_entries_outlive_default_ttl() {
        let s = Setup::initialized();
        let registrar = Address::generate(&s.env);
        assert_eq!(
            s.run(|env| grant_role(env, &s.admin, &registrar, Role::Registrar)),
            Ok(())
        );

        // Only the role entries are under test; keep the host itself alive
        s.run(|env| env.storage().instance().extend_ttl(1_000, 2_000_000));
        s.env.ledger().with_mut(|li| li.sequence_number += 1_000_000);

        assert_eq!(s.run(|env| get_admin(env)), Ok(s.admin.clone()));
        assert_eq!(s.run(|env| require_voting_power_authority(env, &registrar)), Ok(()));
    }

    #[test]
    fn test_non_admin_cannot_grant() {
        let s = Setup::initialized();
        let mallory = Address::generate(&s.env);

        assert_eq!(
            s.run(|env| grant_role(env, &mallory, &mallory, Role::Registrar)),
            Err(AuthError::Unauthorized)
        );
    }

    #[test]
    fn test_transfer_admin_demotes_previous() {
        let s = Setup::initialized();
        let successor = Address::generate(&s.env);

        assert_eq!(s.run(|env| transfer_admin(env, &successor)), Ok(s.admin.clone()));

        assert_eq!(s.run(|env| get_admin(env)), Ok(successor.clone()));
        assert_eq!(s.run(|env| get_role(env, &s.admin)), Role::User);
        assert_eq!(
            s.run(|env| require_admin(env, &s.admin)),
            Err(AuthError::Unauthorized)
        );
        assert_eq!(s.run(|env| require_voting_power_authority(env, &successor)), Ok(()));
    }
}

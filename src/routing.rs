// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Role-based navigation routing.
//!
//! Maps the signed-in account's role onto the screen the app should land
//! on. The mapping is total over [`Role`]; raw role strings pulled out of
//! a token go through the fallible [`destination_for`].

use crate::error::Result;
use crate::models::Role;
use crate::session::Identity;

/// Screens the auth flow can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    ClientDashboard,
    TrainerDashboard,
    AdminDashboard,
}

impl Destination {
    /// Landing screen for a recognized role.
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Client => Destination::ClientDashboard,
            Role::Trainer => Destination::TrainerDashboard,
            Role::Admin => Destination::AdminDashboard,
        }
    }

    /// Stable route identifier understood by the navigation host.
    pub const fn path(&self) -> &'static str {
        match self {
            Destination::ClientDashboard => "/roles/Client/clientScreens/clientDashboard",
            Destination::TrainerDashboard => "/roles/Trainer/trainerScreens/trainerDashboard",
            Destination::AdminDashboard => "/roles/Admin/adminScreens/adminDashboard",
        }
    }
}

/// Resolve a raw role string, as found in a token claim, to a landing
/// screen.
pub fn destination_for(role: &str) -> Result<Destination> {
    let role: Role = role.parse()?;
    Ok(Destination::for_role(role))
}

/// Landing screen for a decoded identity.
///
/// An identity without a role claim gets no navigation (`Ok(None)`). A
/// role claim we do not recognize is an error, not a silent stall on the
/// login screen.
pub fn landing_destination(identity: &Identity) -> Result<Option<Destination>> {
    match identity.role.as_deref() {
        Some(role) => destination_for(role).map(Some),
        None => Ok(None),
    }
}

/// Hook the embedding app implements to receive navigation dispatches.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);
}

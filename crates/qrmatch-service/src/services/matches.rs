//! Match service
//!
//! Proposals are created by scanning another user's QR code. Only the scanned
//! party can accept, and callers only ever see matches they take part in.

use std::collections::HashMap;

use qrmatch_core::entities::{Notification, User, UserMatch};
use qrmatch_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{
    MatchAsScanned, MatchAsScanner, MatchDetailResponse, MatchListResponse, MatchView,
    ScanEntry, ScanRequest, ScannedByEntry, UserResponse,
};

use super::caller::Caller;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Match service
pub struct MatchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MatchService<'a> {
    /// Create a new MatchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Propose a match to the scanned user and notify them
    #[instrument(skip(self, caller, request), fields(scanner_id = %caller.id(), scanned_id = ?request.scanned_id))]
    pub async fn propose(
        &self,
        caller: &Caller,
        request: ScanRequest,
    ) -> ServiceResult<MatchAsScanner> {
        let scanned_id = request
            .scanned_id
            .ok_or(DomainError::ScanTargetNotFound(Snowflake::default()))?;

        let user_match =
            UserMatch::propose(self.ctx.generate_id(), caller.id(), scanned_id, request.reason)?;

        if !self.ctx.user_repo().exists(scanned_id).await? {
            return Err(DomainError::ScanTargetNotFound(scanned_id).into());
        }

        let notification = Notification::proposal(self.ctx.generate_id(), &user_match);
        self.ctx
            .match_repo()
            .create_with_notification(&user_match, &notification)
            .await?;

        info!(match_id = %user_match.id, "Match proposed");

        Ok(MatchAsScanner::from(&user_match))
    }

    /// Accept a match addressed to the caller and notify the scanner
    #[instrument(skip(self, caller), fields(user_id = %caller.id()))]
    pub async fn accept(
        &self,
        caller: &Caller,
        match_id: Snowflake,
    ) -> ServiceResult<MatchAsScanned> {
        let (user_match, _notification) = self
            .ctx
            .match_repo()
            .accept_with_notification(match_id, caller.id(), self.ctx.generate_id())
            .await?
            .ok_or(DomainError::MatchNotFound(match_id))?;

        info!(match_id = %user_match.id, "Match accepted");

        Ok(MatchAsScanned::from(&user_match))
    }

    /// Matches the caller initiated and matches initiated on them
    #[instrument(skip(self, caller), fields(user_id = %caller.id()))]
    pub async fn list(&self, caller: &Caller) -> ServiceResult<MatchListResponse> {
        let scans = self.ctx.match_repo().find_by_scanner(caller.id()).await?;
        let scanned_by = self.ctx.match_repo().find_by_scanned(caller.id()).await?;

        let users = self
            .ctx
            .users_by_id(
                scans
                    .iter()
                    .map(|m| m.scanned_id)
                    .chain(scanned_by.iter().map(|m| m.scanner_id)),
            )
            .await?;

        let scans = scans
            .iter()
            .filter_map(|m| {
                let scanned = profile(&users, m.id, m.scanned_id)?;
                Some(ScanEntry {
                    user_match: MatchAsScanner::from(m),
                    scanned,
                })
            })
            .collect();

        let scanned_by = scanned_by
            .iter()
            .filter_map(|m| {
                let scanner = profile(&users, m.id, m.scanner_id)?;
                Some(ScannedByEntry {
                    user_match: MatchAsScanned::from(m),
                    scanner,
                })
            })
            .collect();

        Ok(MatchListResponse { scans, scanned_by })
    }

    /// A single match, projected for the caller's role
    #[instrument(skip(self, caller), fields(user_id = %caller.id()))]
    pub async fn get(
        &self,
        caller: &Caller,
        match_id: Snowflake,
    ) -> ServiceResult<MatchDetailResponse> {
        let not_found = || DomainError::MatchNotFound(match_id);

        let user_match = self
            .ctx
            .match_repo()
            .find_by_id(match_id)
            .await?
            .ok_or_else(not_found)?;
        let role = user_match.role_of(caller.id()).ok_or_else(not_found)?;

        let users = self
            .ctx
            .users_by_id([user_match.scanner_id, user_match.scanned_id])
            .await?;

        Ok(MatchDetailResponse {
            user_match: MatchView::for_role(&user_match, role),
            scanner: users.get(&user_match.scanner_id).map(UserResponse::from),
            scanned: users.get(&user_match.scanned_id).map(UserResponse::from),
        })
    }
}

fn profile(
    users: &HashMap<Snowflake, User>,
    match_id: Snowflake,
    user_id: Snowflake,
) -> Option<UserResponse> {
    let user = users.get(&user_id);
    if user.is_none() {
        warn!(match_id = %match_id, user_id = %user_id, "Match participant missing, skipping");
    }
    user.map(UserResponse::from)
}

use diesel::prelude::*;
use uuid::Uuid;

use crate::db::enums::ApplicationStatus;
use crate::db::models::hackathon::{
    Hackathon, HackathonApplication, HackathonApplyRequest, HackathonChanges, HackathonPayload,
    NewHackathon, NewHackathonApplication,
};
use crate::db::repositories::hackathons::{HackathonApplicationsRepo, HackathonsRepo};
use crate::error::{AppError, AppResult};
use crate::notify::StatusChangeNotification;
use crate::review::{ApplicationFilter, ApplicationStats, export_csv, export_filename, summarize};
use crate::validation::hackathon::validate_hackathon_payload;

pub struct HackathonsService;

impl HackathonsService {
    pub fn list_admin(conn: &mut PgConnection) -> AppResult<Vec<Hackathon>> {
        Ok(HackathonsRepo::list_all(conn)?)
    }

    pub fn list_public(conn: &mut PgConnection) -> AppResult<Vec<Hackathon>> {
        Ok(HackathonsRepo::list_visible(conn)?)
    }

    pub fn get_public(conn: &mut PgConnection, hackathon_id: Uuid) -> AppResult<Hackathon> {
        let hackathon = HackathonsRepo::find_by_id(conn, hackathon_id)?
            .filter(Hackathon::is_visible)
            .ok_or_else(|| AppError::not_found("Hackathon"))?;
        Ok(hackathon)
    }

    pub fn create(conn: &mut PgConnection, payload: &HackathonPayload) -> AppResult<Hackathon> {
        validate_hackathon_payload(payload)?;

        let new_hackathon = NewHackathon {
            title: payload.title.clone(),
            subtitle: payload.subtitle.clone(),
            description: payload.description.clone(),
            tags: payload.tags.clone(),
            location: payload.location.clone(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            registration_open: payload.registration_open,
            registration_close: payload.registration_close,
            status: payload.status,
            published: payload.published,
            is_featured: false,
        };

        Ok(HackathonsRepo::insert(conn, &new_hackathon)?)
    }

    pub fn update(
        conn: &mut PgConnection,
        hackathon_id: Uuid,
        payload: &HackathonPayload,
    ) -> AppResult<Hackathon> {
        validate_hackathon_payload(payload)?;

        if HackathonsRepo::find_by_id(conn, hackathon_id)?.is_none() {
            return Err(AppError::not_found("Hackathon"));
        }

        let changes = HackathonChanges {
            title: payload.title.clone(),
            subtitle: Some(payload.subtitle.clone()),
            description: payload.description.clone(),
            tags: payload.tags.clone(),
            location: payload.location.clone(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            registration_open: Some(payload.registration_open),
            registration_close: Some(payload.registration_close),
            status: payload.status,
            published: payload.published,
            updated_at: chrono::Utc::now(),
        };

        Ok(HackathonsRepo::update(conn, hackathon_id, &changes)?)
    }

    /// The featured record is protected: the refusal happens before any
    /// delete is issued.
    pub fn ensure_deletable(hackathon: &Hackathon) -> AppResult<()> {
        if hackathon.is_featured {
            return Err(AppError::validation(
                "The featured hackathon cannot be deleted",
            ));
        }
        Ok(())
    }

    pub fn delete(conn: &mut PgConnection, hackathon_id: Uuid) -> AppResult<()> {
        let hackathon = HackathonsRepo::find_by_id(conn, hackathon_id)?
            .ok_or_else(|| AppError::not_found("Hackathon"))?;

        Self::ensure_deletable(&hackathon)?;

        HackathonsRepo::delete_by_id(conn, hackathon_id)?;
        Ok(())
    }

    pub fn apply(
        conn: &mut PgConnection,
        hackathon_id: Uuid,
        req: &HackathonApplyRequest,
    ) -> AppResult<HackathonApplication> {
        let hackathon = HackathonsRepo::find_by_id(conn, hackathon_id)?
            .filter(Hackathon::is_visible)
            .ok_or_else(|| AppError::not_found("Hackathon"))?;

        if let (Some(open), Some(close)) = (hackathon.registration_open, hackathon.registration_close)
        {
            let now = chrono::Utc::now();
            if now < open || now > close {
                return Err(AppError::validation("Registration is not open"));
            }
        }

        let new_application = NewHackathonApplication {
            hackathon_id,
            full_name: req.full_name.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            affiliation: req.affiliation.clone(),
            experience_level: req.experience_level.clone(),
            team_name: req.team_name.clone(),
            project_idea: req.project_idea.clone(),
            portfolio_url: req.portfolio_url.clone(),
            github_url: req.github_url.clone(),
            status: ApplicationStatus::Submitted,
        };

        let application = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let application = HackathonApplicationsRepo::insert(conn, &new_application)?;
            HackathonsRepo::increment_registration_count(conn, hackathon_id)?;
            Ok(application)
        })?;

        Ok(application)
    }

    pub fn list_applications(
        conn: &mut PgConnection,
        hackathon_id: Uuid,
        filter: &ApplicationFilter,
    ) -> AppResult<Vec<HackathonApplication>> {
        if HackathonsRepo::find_by_id(conn, hackathon_id)?.is_none() {
            return Err(AppError::not_found("Hackathon"));
        }

        let applications = HackathonApplicationsRepo::list_for_hackathon(conn, hackathon_id)?;
        Ok(filter.apply(applications))
    }

    pub fn application_stats(
        conn: &mut PgConnection,
        hackathon_id: Uuid,
    ) -> AppResult<ApplicationStats> {
        if HackathonsRepo::find_by_id(conn, hackathon_id)?.is_none() {
            return Err(AppError::not_found("Hackathon"));
        }

        let applications = HackathonApplicationsRepo::list_for_hackathon(conn, hackathon_id)?;
        Ok(summarize(&applications))
    }

    /// Moves an application to a new status. Returns the persisted record
    /// together with the notification payload the caller fires afterwards;
    /// delivery of that payload must not affect this transition.
    pub fn transition_application(
        conn: &mut PgConnection,
        hackathon_id: Uuid,
        application_id: Uuid,
        new_status: ApplicationStatus,
    ) -> AppResult<(HackathonApplication, StatusChangeNotification)> {
        let hackathon = HackathonsRepo::find_by_id(conn, hackathon_id)?
            .ok_or_else(|| AppError::not_found("Hackathon"))?;

        let application =
            HackathonApplicationsRepo::find_for_hackathon(conn, hackathon_id, application_id)?
                .ok_or_else(|| AppError::not_found("Application"))?;

        let old_status = application.status;
        if !old_status.can_transition_to(new_status) {
            return Err(AppError::validation(format!(
                "Cannot move an application from {} to {}",
                old_status, new_status
            )));
        }

        let updated = HackathonApplicationsRepo::update_status(conn, application_id, new_status)?;

        let notification = StatusChangeNotification {
            program_title: hackathon.title,
            applicant_name: updated.full_name.clone(),
            applicant_email: updated.email.clone(),
            old_status,
            new_status,
        };

        Ok((updated, notification))
    }

    /// CSV of the filtered view plus the download filename derived from the
    /// hackathon title.
    pub fn export_applications(
        conn: &mut PgConnection,
        hackathon_id: Uuid,
        filter: &ApplicationFilter,
    ) -> AppResult<(String, String)> {
        let hackathon = HackathonsRepo::find_by_id(conn, hackathon_id)?
            .ok_or_else(|| AppError::not_found("Hackathon"))?;

        let applications = HackathonApplicationsRepo::list_for_hackathon(conn, hackathon_id)?;
        let filtered = filter.apply(applications);
        let csv = export_csv(&filtered)?;

        Ok((export_filename(&hackathon.title), csv))
    }
}

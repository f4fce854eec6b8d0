use diesel::prelude::*;
use uuid::Uuid;

use crate::db::enums::ApplicationStatus;
use crate::db::models::incubation::{
    IncubationApplication, IncubationApplyRequest, IncubationProgram, IncubationProgramChanges,
    IncubationProgramPayload, NewIncubationApplication, NewIncubationProgram,
};
use crate::db::repositories::incubation::{IncubationApplicationsRepo, IncubationProgramsRepo};
use crate::error::{AppError, AppResult};
use crate::notify::StatusChangeNotification;
use crate::review::{ApplicationFilter, ApplicationStats, export_csv, export_filename, summarize};
use crate::validation::incubation::validate_incubation_payload;

pub struct IncubationService;

impl IncubationService {
    pub fn list_admin(conn: &mut PgConnection) -> AppResult<Vec<IncubationProgram>> {
        Ok(IncubationProgramsRepo::list_all(conn)?)
    }

    pub fn list_public(conn: &mut PgConnection) -> AppResult<Vec<IncubationProgram>> {
        Ok(IncubationProgramsRepo::list_visible(conn)?)
    }

    pub fn get_public(conn: &mut PgConnection, program_id: Uuid) -> AppResult<IncubationProgram> {
        let program = IncubationProgramsRepo::find_by_id(conn, program_id)?
            .filter(IncubationProgram::is_visible)
            .ok_or_else(|| AppError::not_found("Incubation program"))?;
        Ok(program)
    }

    pub fn create(
        conn: &mut PgConnection,
        payload: &IncubationProgramPayload,
    ) -> AppResult<IncubationProgram> {
        validate_incubation_payload(payload)?;

        let new_program = NewIncubationProgram {
            title: payload.title.clone(),
            subtitle: payload.subtitle.clone(),
            description: payload.description.clone(),
            tags: payload.tags.clone(),
            location: payload.location.clone(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            application_open: payload.application_open,
            application_close: payload.application_close,
            status: payload.status,
            published: payload.published,
            is_featured: false,
        };

        Ok(IncubationProgramsRepo::insert(conn, &new_program)?)
    }

    pub fn update(
        conn: &mut PgConnection,
        program_id: Uuid,
        payload: &IncubationProgramPayload,
    ) -> AppResult<IncubationProgram> {
        validate_incubation_payload(payload)?;

        if IncubationProgramsRepo::find_by_id(conn, program_id)?.is_none() {
            return Err(AppError::not_found("Incubation program"));
        }

        let changes = IncubationProgramChanges {
            title: payload.title.clone(),
            subtitle: Some(payload.subtitle.clone()),
            description: payload.description.clone(),
            tags: payload.tags.clone(),
            location: payload.location.clone(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            application_open: Some(payload.application_open),
            application_close: Some(payload.application_close),
            status: payload.status,
            published: payload.published,
            updated_at: chrono::Utc::now(),
        };

        Ok(IncubationProgramsRepo::update(conn, program_id, &changes)?)
    }

    pub fn ensure_deletable(program: &IncubationProgram) -> AppResult<()> {
        if program.is_featured {
            return Err(AppError::validation(
                "The featured incubation program cannot be deleted",
            ));
        }
        Ok(())
    }

    pub fn delete(conn: &mut PgConnection, program_id: Uuid) -> AppResult<()> {
        let program = IncubationProgramsRepo::find_by_id(conn, program_id)?
            .ok_or_else(|| AppError::not_found("Incubation program"))?;

        Self::ensure_deletable(&program)?;

        IncubationProgramsRepo::delete_by_id(conn, program_id)?;
        Ok(())
    }

    pub fn apply(
        conn: &mut PgConnection,
        program_id: Uuid,
        req: &IncubationApplyRequest,
    ) -> AppResult<IncubationApplication> {
        let program = IncubationProgramsRepo::find_by_id(conn, program_id)?
            .filter(IncubationProgram::is_visible)
            .ok_or_else(|| AppError::not_found("Incubation program"))?;

        if let (Some(open), Some(close)) = (program.application_open, program.application_close) {
            let now = chrono::Utc::now();
            if now < open || now > close {
                return Err(AppError::validation("Applications are not open"));
            }
        }

        let new_application = NewIncubationApplication {
            program_id,
            founder_name: req.founder_name.clone(),
            email: req.email.clone(),
            phone: req.phone.clone(),
            startup_name: req.startup_name.clone(),
            stage: req.stage.clone(),
            team_size: req.team_size,
            pitch: req.pitch.clone(),
            problem_statement: req.problem_statement.clone(),
            website_url: req.website_url.clone(),
            status: ApplicationStatus::Submitted,
        };

        let application = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let application = IncubationApplicationsRepo::insert(conn, &new_application)?;
            IncubationProgramsRepo::increment_application_count(conn, program_id)?;
            Ok(application)
        })?;

        Ok(application)
    }

    pub fn list_applications(
        conn: &mut PgConnection,
        program_id: Uuid,
        filter: &ApplicationFilter,
    ) -> AppResult<Vec<IncubationApplication>> {
        if IncubationProgramsRepo::find_by_id(conn, program_id)?.is_none() {
            return Err(AppError::not_found("Incubation program"));
        }

        let applications = IncubationApplicationsRepo::list_for_program(conn, program_id)?;
        Ok(filter.apply(applications))
    }

    pub fn application_stats(
        conn: &mut PgConnection,
        program_id: Uuid,
    ) -> AppResult<ApplicationStats> {
        if IncubationProgramsRepo::find_by_id(conn, program_id)?.is_none() {
            return Err(AppError::not_found("Incubation program"));
        }

        let applications = IncubationApplicationsRepo::list_for_program(conn, program_id)?;
        Ok(summarize(&applications))
    }

    /// Same contract as the hackathon transition, with the incubation-only
    /// reviewed_at stamp applied by the repository.
    pub fn transition_application(
        conn: &mut PgConnection,
        program_id: Uuid,
        application_id: Uuid,
        new_status: ApplicationStatus,
    ) -> AppResult<(IncubationApplication, StatusChangeNotification)> {
        let program = IncubationProgramsRepo::find_by_id(conn, program_id)?
            .ok_or_else(|| AppError::not_found("Incubation program"))?;

        let application =
            IncubationApplicationsRepo::find_for_program(conn, program_id, application_id)?
                .ok_or_else(|| AppError::not_found("Application"))?;

        let old_status = application.status;
        if !old_status.can_transition_to(new_status) {
            return Err(AppError::validation(format!(
                "Cannot move an application from {} to {}",
                old_status, new_status
            )));
        }

        let updated = IncubationApplicationsRepo::update_status(conn, application_id, new_status)?;

        let notification = StatusChangeNotification {
            program_title: program.title,
            applicant_name: updated.founder_name.clone(),
            applicant_email: updated.email.clone(),
            old_status,
            new_status,
        };

        Ok((updated, notification))
    }

    pub fn export_applications(
        conn: &mut PgConnection,
        program_id: Uuid,
        filter: &ApplicationFilter,
    ) -> AppResult<(String, String)> {
        let program = IncubationProgramsRepo::find_by_id(conn, program_id)?
            .ok_or_else(|| AppError::not_found("Incubation program"))?;

        let applications = IncubationApplicationsRepo::list_for_program(conn, program_id)?;
        let filtered = filter.apply(applications);
        let csv = export_csv(&filtered)?;

        Ok((export_filename(&program.title), csv))
    }
}

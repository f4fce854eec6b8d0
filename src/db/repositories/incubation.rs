use diesel::prelude::*;
use uuid::Uuid;

use crate::db::enums::ApplicationStatus;
use crate::db::models::incubation::{
    IncubationApplication, IncubationProgram, IncubationProgramChanges, NewIncubationApplication,
    NewIncubationProgram,
};

pub struct IncubationProgramsRepo;

impl IncubationProgramsRepo {
    pub fn list_all(
        conn: &mut PgConnection,
    ) -> Result<Vec<IncubationProgram>, diesel::result::Error> {
        use crate::schema::incubation_programs::dsl::*;
        incubation_programs
            .select(IncubationProgram::as_select())
            .order((is_featured.desc(), created_at.desc()))
            .load(conn)
    }

    pub fn list_visible(
        conn: &mut PgConnection,
    ) -> Result<Vec<IncubationProgram>, diesel::result::Error> {
        use crate::schema::incubation_programs::dsl::*;
        incubation_programs
            .filter(published.eq(true))
            .filter(status.eq("published"))
            .select(IncubationProgram::as_select())
            .order((is_featured.desc(), created_at.desc()))
            .load(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        program_id: Uuid,
    ) -> Result<Option<IncubationProgram>, diesel::result::Error> {
        use crate::schema::incubation_programs::dsl::*;
        incubation_programs
            .filter(id.eq(program_id))
            .select(IncubationProgram::as_select())
            .first(conn)
            .optional()
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_program: &NewIncubationProgram,
    ) -> Result<IncubationProgram, diesel::result::Error> {
        diesel::insert_into(crate::schema::incubation_programs::table)
            .values(new_program)
            .get_result(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        program_id: Uuid,
        changes: &IncubationProgramChanges,
    ) -> Result<IncubationProgram, diesel::result::Error> {
        use crate::schema::incubation_programs::dsl::*;
        diesel::update(incubation_programs.filter(id.eq(program_id)))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        program_id: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::incubation_programs::dsl::*;
        diesel::delete(incubation_programs.filter(id.eq(program_id))).execute(conn)
    }

    pub fn increment_application_count(
        conn: &mut PgConnection,
        program_id: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::incubation_programs::dsl::*;
        diesel::update(incubation_programs.filter(id.eq(program_id)))
            .set(application_count.eq(application_count + 1))
            .execute(conn)
    }
}

pub struct IncubationApplicationsRepo;

impl IncubationApplicationsRepo {
    pub fn list_for_program(
        conn: &mut PgConnection,
        parent_id: Uuid,
    ) -> Result<Vec<IncubationApplication>, diesel::result::Error> {
        use crate::schema::incubation_applications::dsl::*;
        incubation_applications
            .filter(program_id.eq(parent_id))
            .select(IncubationApplication::as_select())
            .order(created_at.desc())
            .load(conn)
    }

    pub fn find_for_program(
        conn: &mut PgConnection,
        parent_id: Uuid,
        application_id: Uuid,
    ) -> Result<Option<IncubationApplication>, diesel::result::Error> {
        use crate::schema::incubation_applications::dsl::*;
        incubation_applications
            .filter(id.eq(application_id))
            .filter(program_id.eq(parent_id))
            .select(IncubationApplication::as_select())
            .first(conn)
            .optional()
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_application: &NewIncubationApplication,
    ) -> Result<IncubationApplication, diesel::result::Error> {
        diesel::insert_into(crate::schema::incubation_applications::table)
            .values(new_application)
            .get_result(conn)
    }

    /// Incubation transitions also stamp the review time.
    pub fn update_status(
        conn: &mut PgConnection,
        application_id: Uuid,
        new_status: ApplicationStatus,
    ) -> Result<IncubationApplication, diesel::result::Error> {
        use crate::schema::incubation_applications::dsl::*;
        diesel::update(incubation_applications.filter(id.eq(application_id)))
            .set((
                status.eq(new_status),
                reviewed_at.eq(Some(chrono::Utc::now())),
            ))
            .get_result(conn)
    }
}

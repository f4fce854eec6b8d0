use diesel::prelude::*;
use uuid::Uuid;

use crate::db::enums::ApplicationStatus;
use crate::db::models::hackathon::{
    Hackathon, HackathonApplication, HackathonChanges, NewHackathon, NewHackathonApplication,
};

pub struct HackathonsRepo;

impl HackathonsRepo {
    /// Admin listing order: the featured record pinned first, then
    /// newest-created first.
    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Hackathon>, diesel::result::Error> {
        use crate::schema::hackathons::dsl::*;
        hackathons
            .select(Hackathon::as_select())
            .order((is_featured.desc(), created_at.desc()))
            .load(conn)
    }

    pub fn list_visible(conn: &mut PgConnection) -> Result<Vec<Hackathon>, diesel::result::Error> {
        use crate::schema::hackathons::dsl::*;
        hackathons
            .filter(published.eq(true))
            .filter(status.eq("published"))
            .select(Hackathon::as_select())
            .order((is_featured.desc(), created_at.desc()))
            .load(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        hackathon_id: Uuid,
    ) -> Result<Option<Hackathon>, diesel::result::Error> {
        use crate::schema::hackathons::dsl::*;
        hackathons
            .filter(id.eq(hackathon_id))
            .select(Hackathon::as_select())
            .first(conn)
            .optional()
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_hackathon: &NewHackathon,
    ) -> Result<Hackathon, diesel::result::Error> {
        diesel::insert_into(crate::schema::hackathons::table)
            .values(new_hackathon)
            .get_result(conn)
    }

    pub fn update(
        conn: &mut PgConnection,
        hackathon_id: Uuid,
        changes: &HackathonChanges,
    ) -> Result<Hackathon, diesel::result::Error> {
        use crate::schema::hackathons::dsl::*;
        diesel::update(hackathons.filter(id.eq(hackathon_id)))
            .set(changes)
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        hackathon_id: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::hackathons::dsl::*;
        diesel::delete(hackathons.filter(id.eq(hackathon_id))).execute(conn)
    }

    pub fn increment_registration_count(
        conn: &mut PgConnection,
        hackathon_id: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::hackathons::dsl::*;
        diesel::update(hackathons.filter(id.eq(hackathon_id)))
            .set(registration_count.eq(registration_count + 1))
            .execute(conn)
    }
}

pub struct HackathonApplicationsRepo;

impl HackathonApplicationsRepo {
    pub fn list_for_hackathon(
        conn: &mut PgConnection,
        parent_id: Uuid,
    ) -> Result<Vec<HackathonApplication>, diesel::result::Error> {
        use crate::schema::hackathon_applications::dsl::*;
        hackathon_applications
            .filter(hackathon_id.eq(parent_id))
            .select(HackathonApplication::as_select())
            .order(created_at.desc())
            .load(conn)
    }

    pub fn find_for_hackathon(
        conn: &mut PgConnection,
        parent_id: Uuid,
        application_id: Uuid,
    ) -> Result<Option<HackathonApplication>, diesel::result::Error> {
        use crate::schema::hackathon_applications::dsl::*;
        hackathon_applications
            .filter(id.eq(application_id))
            .filter(hackathon_id.eq(parent_id))
            .select(HackathonApplication::as_select())
            .first(conn)
            .optional()
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_application: &NewHackathonApplication,
    ) -> Result<HackathonApplication, diesel::result::Error> {
        diesel::insert_into(crate::schema::hackathon_applications::table)
            .values(new_application)
            .get_result(conn)
    }

    pub fn update_status(
        conn: &mut PgConnection,
        application_id: Uuid,
        new_status: ApplicationStatus,
    ) -> Result<HackathonApplication, diesel::result::Error> {
        use crate::schema::hackathon_applications::dsl::*;
        diesel::update(hackathon_applications.filter(id.eq(application_id)))
            .set(status.eq(new_status))
            .get_result(conn)
    }
}

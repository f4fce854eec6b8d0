use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::auth::{NewUser, User};

pub struct UsersRepo;

impl UsersRepo {
    pub fn find_active_by_id(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Option<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users
            .filter(id.eq(user_id))
            .filter(is_active.eq(true))
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_by_email(
        conn: &mut PgConnection,
        email_addr: &str,
    ) -> Result<Option<User>, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        users
            .filter(email.eq(email_addr))
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn email_exists(
        conn: &mut PgConnection,
        email_addr: &str,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        diesel::select(diesel::dsl::exists(users.filter(email.eq(email_addr)))).get_result(conn)
    }

    pub fn username_exists(
        conn: &mut PgConnection,
        username_val: &str,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::users::dsl::*;
        diesel::select(diesel::dsl::exists(users.filter(username.eq(username_val))))
            .get_result(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_user: &NewUser,
    ) -> Result<User, diesel::result::Error> {
        diesel::insert_into(crate::schema::users::table)
            .values(new_user)
            .get_result(conn)
    }
}

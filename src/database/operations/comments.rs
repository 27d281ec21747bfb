use std::collections::HashMap;

use diesel::{ dsl::count_star, prelude::* };
use uuid::Uuid;

use crate::{ models::{ Comment, NewComment }, schema::comments };

// CREATE COMMENT
pub fn create_comment(conn: &mut PgConnection, new_comment: &NewComment) -> QueryResult<Comment> {
    diesel
        ::insert_into(comments::table)
        .values(new_comment)
        .returning(Comment::as_returning())
        .get_result(conn)
}

// COMMENT COUNT PER POST
//
// Posts without comments are absent from the map.
pub fn comment_counts(conn: &mut PgConnection) -> QueryResult<HashMap<Uuid, i64>> {
    let rows: Vec<(Uuid, i64)> = comments::table
        .group_by(comments::post_id)
        .select((comments::post_id, count_star()))
        .load(conn)?;

    Ok(rows.into_iter().collect())
}

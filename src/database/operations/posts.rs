use std::collections::HashMap;

use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    database::operations::comments::comment_counts,
    models::{ Comment, NewPost, Post, PostSummary, PostWithComments },
    schema::{ comments, posts },
};

// LIST POSTS WITH COMMENT COUNTS
//
// Posts and counts are read in one repeatable-read transaction so every
// count matches the comment rows visible in the same snapshot.
pub fn list_post_summaries(conn: &mut PgConnection) -> QueryResult<Vec<PostSummary>> {
    conn.build_transaction()
        .read_only()
        .repeatable_read()
        .run(|conn| {
            let rows: Vec<(Uuid, String)> = posts::table
                .select((posts::id, posts::title))
                .load(conn)?;
            let counts: HashMap<Uuid, i64> = comment_counts(conn)?;

            Ok(
                rows
                    .into_iter()
                    .map(|(id, title)| PostSummary {
                        comment_count: counts.get(&id).copied().unwrap_or(0),
                        id,
                        title,
                    })
                    .collect()
            )
        })
}

// GET POST BY ID
pub fn get_post(conn: &mut PgConnection, post_id: Uuid) -> QueryResult<Option<Post>> {
    posts::table.find(post_id).select(Post::as_select()).first(conn).optional()
}

// GET POST BY ID, WITH ITS COMMENTS
pub fn get_post_with_comments(
    conn: &mut PgConnection,
    post_id: Uuid
) -> QueryResult<Option<PostWithComments>> {
    conn.build_transaction()
        .read_only()
        .repeatable_read()
        .run(|conn| {
            let Some(post) = get_post(conn, post_id)? else {
                return Ok(None);
            };

            let post_comments = Comment::belonging_to(&post)
                .select(Comment::as_select())
                .load(conn)?;

            Ok(Some(PostWithComments { post, comments: post_comments }))
        })
}

// CREATE POST
pub fn create_post(conn: &mut PgConnection, new_post: &NewPost) -> QueryResult<Post> {
    diesel
        ::insert_into(posts::table)
        .values(new_post)
        .returning(Post::as_returning())
        .get_result(conn)
}

// DELETE POST AND ITS COMMENTS
//
// The cascade is explicit: comments go first, then the post, in one
// transaction. Returns the number of posts removed (0 or 1).
pub fn delete_post(conn: &mut PgConnection, post_id: Uuid) -> QueryResult<usize> {
    conn.transaction(|conn| {
        diesel::delete(comments::table.filter(comments::post_id.eq(post_id))).execute(conn)?;
        diesel::delete(posts::table.find(post_id)).execute(conn)
    })
}

use chrono::{TimeDelta, Utc};

use crate::prelude::*;

#[derive(Debug, Serialize)]
pub struct Session {
    pub token: String,
}

/// Issues a signed token for the user, valid for the configured duration.
pub fn do_login(state: &ServerState, user_id: UserId) -> Session {
    let expires = Utc::now() + TimeDelta::seconds(state.config.shared.session_duration as i64);

    Session {
        token: state.keys.issue(user_id, expires),
    }
}

use std::collections::HashMap;
use std::env;
use std::fmt::Debug;

use lazy_static::lazy_static;

/// Environment switches for verbose dumps, on top of `RUST_LOG`.
#[derive(strum_macros::Display, Eq, PartialEq, Debug, Hash, Clone, Copy)]
pub enum DbgFlg {
    #[strum(serialize = "DBG_FLG_JOIN")]
    Join,
    #[strum(serialize = "DBG_FLG_NOTIFY")]
    Notify,
}

lazy_static! {
    pub static ref DBG_FLG_DEFAULTS: HashMap<DbgFlg, bool> =
        HashMap::from([(DbgFlg::Join, false), (DbgFlg::Notify, false)]);
}

pub trait DebugIf: Debug {
    fn dbg_if(&self, flg: DbgFlg);
}

impl<T: Debug> DebugIf for T {
    fn dbg_if(&self, flg: DbgFlg) {
        if checkflag(flg) {
            log::debug!("[{}] {:#?}", flg, self);
        }
    }
}

pub fn log_if(s: &str, flg: DbgFlg) {
    if checkflag(flg) {
        log::debug!("[{}] {}", flg, s);
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

pub fn checkflag(flg: DbgFlg) -> bool {
    env::var(flg.to_string()).ok().map_or_else(
        || DBG_FLG_DEFAULTS.get(&flg).copied().unwrap_or(false),
        |s| parse_flag(&s),
    )
}

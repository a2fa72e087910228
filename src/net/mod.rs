//! Network access: same-origin header/footer fragment loading.

pub mod fragment;

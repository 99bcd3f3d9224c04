pub mod api {
    pub mod window;
}

pub mod callbacks {
    pub mod enum_windows;
}

pub mod window {
    pub mod window_ref;
}

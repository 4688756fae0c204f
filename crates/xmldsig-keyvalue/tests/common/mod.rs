//! Fixtures captured from a third-party XML-DSig signer.

#![allow(dead_code)]

pub const DSIG: &str = "http://www.w3.org/2000/09/xmldsig#";

/// 1024-bit key with a one-byte `PgenCounter`.
pub mod small {
    pub const P: &str = "oDZlcdJA1Kf6UeNEIZqm4KDqA6zpX7CmEtAGWi9pgnBhWOUDVEfhswfsvTLR5BCbKfE6KoHvt5Hh8D1RcAko//iZkLZ+gds9y/5Oxape8tu3TUi1BnNPWu8ieXjMtdnpyudKFsCymssJked1rBeRePG23HTVwOV1DpopjRkjBEU=";
    pub const Q: &str = "0JxsZhjbIteTbrtfWmt5Uif6il8=";
    pub const G: &str = "EOVCfv1saTWIc6Dgim24a07dqqyCJXmIT+5PrgrfV3M8/hfmaMfZtpvM0BUkXVv0dFScnN7txnSpnLWchBz0RfehL6c7Mofu/d2H1cp8zvwTasfiJhypQHDuC4p1aSXuQ1hnzzyYeHKzBH9r0PA78haL7/HnwrrscttXGhmU/L0=";
    pub const Y: &str = "HBHSdiOJDoZhRpK+B4Ft5hisHvRjz6rELay+aPrya2yKRUUN7ZysNi12PltAvljexay0gEpPncg6TrRtH1+7usTxbgkuIwcQ3RPPIzM7y+XldbcyVUfyze5+zXy9ALiugT+zP8DOMRj9Yj6kR6ZsgbnSdlH2hGIn9NctXgRQ6Kg=";
    pub const SEED: &str = "NKemrvYwT/4u8DNiXoPj9jO6LAg=";
    pub const PGEN_COUNTER: &str = "uA==";
}

/// 2048-bit key with a two-byte `PgenCounter`.
pub mod large {
    pub const P: &str = "nHoAAyz1ZrA/4ajJnY09oVYvr/juj6cJHhVKnrIpIlWRh2EHIFsDiHR7hFvTvvTwmPiNRKBqO7Q1LST5qabEkvbvhk11d5wwItTWmLqO969NkUzA2cTqebEdshDhnl8YN7DrkCdrYu0PE0ZL/ho5yp6aRYME/Zoq2qDet+He3v9ZkjlJLg5mLPK6Q6tmLeSNTob/6fABv1RCREsyvYegWp4TxLvrgb/fd6Wtt7GC4fwWQlBeRmBIYFklNcE2g6iYMQOkgM7D/a0YrhUI3Vy3vfFNR/kKF+OBhB82V+QPhqPbdkXA+StpwOYj48mHHyr3ZvmlQdHJSkEY/p5JFbG8vw==";
    pub const Q: &str = "ni1fE84dSrJerbAmEAYI/0w+q97KSFmqrzUFyHk2V48=";
    pub const G: &str = "m46FXiDGgIUpO7ehefrbdGqVn1+VOEc6Cyxi5xKXIDTYtLST6wy+FPybWOuYv1Sya8AeEOmz6HAht/k3GQZwVkt1ZSZCJZw8/p/zwyHTST+NdnCHXGDGvFh/wnEa0UsmTBmqBsxPiCOahWXsQ4VvTI5exRsu+/qwc/Nqbw1K8eq6pzn67ZA2/RyLepLPZGBo9vkdPmYtFKRj3PmC7/mjVWfA3tyPa0coFIx9XtjPiVtnmG9lJ9dVhGIY2cO7j8iDdBLdx6enMu67sDyHlPBDpLYSRx2Qqkcy1IdlAyxF6fOnxsDBC/N7LXNHea52XQn1TO2CvbIG7KXI8SxLr+CVbA==";
    pub const Y: &str = "Yt23Dtp7UT1h/HsE6qlLBX+PIwdK0N0p0wFdWmIkw91hD41Y7OKC5xXs5jkHqSfQtiGYsUaS4aYoxQiuE9wnjiPUEii5Zau7s3jVkeZAvmRDQkjvl6SPb7kNIcw2PYdL9wSsL1euaTCWeH6m7fhO0tBJN0INYFXZ3ca4bWBYwNgs2UgCooaoO2df6eMf/1rFSr5gDZLqOtGgXJTOvb1MO/R8pTmaNmbkpGp4X5ApbExzqyb9v4dPNna3qgPBJn0vwTw0RUyLPlFOjaMHBeoRuC77e2TNqVMXGxRRnlB25XJsCsFY/+bePsPQZXGIFB1gsMzDtB/M6WKcPuAsevZDrw==";
    pub const SEED: &str = "3Y9u5gc5dVKPhwiUzwmMV09ojummGzJ87A0llG9ey60=";
    pub const PGEN_COUNTER: &str = "AWs=";
}

pub fn dsa_key_value(fields: &[(&str, &str)]) -> String {
    let children: String = fields
        .iter()
        .map(|(name, value)| format!("<{name}>{value}</{name}>"))
        .collect();
    format!(r#"<KeyValue xmlns="{DSIG}"><DSAKeyValue>{children}</DSAKeyValue></KeyValue>"#)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

use beryl::core::commands::CommandSpec;
use beryl::core::commands::list::LLen;
use bytes::Bytes;

#[tokio::test]
async fn test_llen_frame_shape() {
    let cmd = LLen {
        key: Bytes::from_static(b"mylist"),
    };
    assert_eq!(cmd.name(), "LLEN");
    assert_eq!(cmd.to_resp_args(), vec![Bytes::from_static(b"mylist")]);
}

#[tokio::test]
async fn test_llen_identical_args_build_identical_frames() {
    let a = LLen {
        key: Bytes::from_static(b"mylist"),
    };
    let b = LLen {
        key: Bytes::from_static(b"mylist"),
    };
    assert_eq!(a.to_frame(), b.to_frame());
}

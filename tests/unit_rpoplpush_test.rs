use beryl::core::commands::CommandSpec;
use beryl::core::commands::list::RPopLPush;
use bytes::Bytes;

#[tokio::test]
async fn test_rpoplpush_frame_shape() {
    let cmd = RPopLPush {
        source: Bytes::from_static(b"src"),
        destination: Bytes::from_static(b"dst"),
    };
    assert_eq!(cmd.name(), "RPOPLPUSH");
    assert_eq!(
        cmd.to_resp_args(),
        vec![Bytes::from_static(b"src"), Bytes::from_static(b"dst")]
    );
}

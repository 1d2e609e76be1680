use beryl::core::commands::CommandSpec;
use beryl::core::commands::list::RPop;
use bytes::Bytes;

#[tokio::test]
async fn test_rpop_frame_shape() {
    let cmd = RPop {
        key: Bytes::from_static(b"mylist"),
    };
    assert_eq!(cmd.name(), "RPOP");
    assert_eq!(cmd.to_resp_args(), vec![Bytes::from_static(b"mylist")]);
}

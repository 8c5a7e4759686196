use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 치명적 오류로 처리하는 함수.

    리포트 작업은 설정 파일 없이는 동작할 수 없으므로, 해당 환경변수가 없으면
    panic 으로 즉시 종료시킨다. (스케줄러에는 non-zero exit 로 보인다)

    # Arguments
    * `key` - 조회할 환경변수 키명

    # Returns
    * `String` - 환경변수 값

    # Panics
    환경변수가 설정되지 않은 경우
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    차트/웹훅 설정 파일(TOML)의 경로를 환경변수 `SERVER_CONFIG_PATH` 에서 읽어온다.

    이 파일에는 rrdtool 실행 정보, RRD 파일 경로, 출력 이미지 경로, 시리즈 정의,
    웹훅 URL 및 캡션이 포함되어 있다.
    once_lazy 를 사용하여 첫 접근 시에만 초기화된다.
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

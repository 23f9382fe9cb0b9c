//! 프로필 사진 업로드 요청
//!
//! multipart 본문에서 꺼낸 `file` 필드를 서비스 계층에 전달하기 위한 값입니다.

/// 허용되는 사진 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureFormat {
    Jpeg,
    Png,
}

impl PictureFormat {
    pub const ALL: [PictureFormat; 2] = [PictureFormat::Jpeg, PictureFormat::Png];

    /// 저장 파일 확장자
    pub fn extension(&self) -> &'static str {
        match self {
            PictureFormat::Jpeg => "jpg",
            PictureFormat::Png => "png",
        }
    }

    /// MIME 타입으로부터 형식 판별
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(PictureFormat::Jpeg),
            "image/png" => Some(PictureFormat::Png),
            _ => None,
        }
    }

    /// 파일명 확장자로부터 형식 판별
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(PictureFormat::Jpeg),
            "png" => Some(PictureFormat::Png),
            _ => None,
        }
    }
}

/// 업로드된 사진 파일
#[derive(Debug, Clone)]
pub struct PictureUpload {
    /// 클라이언트가 보낸 원본 파일명
    pub file_name: String,
    /// multipart 파트의 Content-Type
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PictureUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// 파일 형식 판별
    ///
    /// Content-Type 과 파일 확장자가 모두 JPEG/PNG 이고 서로 일치해야 합니다.
    pub fn format(&self) -> Option<PictureFormat> {
        let by_type = PictureFormat::from_content_type(&self.content_type)?;
        let by_name = PictureFormat::from_file_name(&self.file_name)?;
        (by_type == by_name).then_some(by_type)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(PictureUpload::new("me.PNG", "image/png", vec![]).format(), Some(PictureFormat::Png));
        assert_eq!(PictureUpload::new("me.jpeg", "image/jpeg", vec![]).format(), Some(PictureFormat::Jpeg));
        assert_eq!(PictureUpload::new("me.jpg", "image/jpeg", vec![]).format().map(|f| f.extension()), Some("jpg"));
    }

    #[test]
    fn test_format_rejects_mismatch_and_unknown() {
        assert_eq!(PictureUpload::new("me.png", "image/jpeg", vec![]).format(), None);
        assert_eq!(PictureUpload::new("me.gif", "image/gif", vec![]).format(), None);
        assert_eq!(PictureUpload::new("me", "image/png", vec![]).format(), None);
        assert_eq!(PictureUpload::new("me.png", "text/plain", vec![]).format(), None);
    }
}

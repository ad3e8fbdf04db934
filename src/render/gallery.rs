//! Embedded gallery widget
//!
//! The markup is emitted inline with a scoped style block and a small
//! navigation script so every page stays self-contained. The script
//! only moves an active index; nothing survives a reload.

use crate::helpers::html_escape;

/// One gallery slide
pub struct Slide {
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
}

const GALLERY_STYLE: &str = r#"<style>
.gallery{position:relative;margin:1.5rem 0}
.gallery-slide{display:none;margin:0}
.gallery-slide.active{display:block}
.gallery-slide img{width:100%;border-radius:6px}
.gallery-slide figcaption{color:#666;font-size:.9rem;padding:.35rem 0}
.gallery-prev,.gallery-next{position:absolute;top:45%;border:0;background:rgba(0,0,0,.55);color:#fff;font-size:1.4rem;padding:.2rem .7rem;border-radius:4px;cursor:pointer}
.gallery-prev{left:.5rem}
.gallery-next{right:.5rem}
.gallery-counter{position:absolute;top:.5rem;right:.5rem;background:rgba(0,0,0,.55);color:#fff;padding:.15rem .6rem;border-radius:4px;font-size:.8rem}
.gallery-dots{text-align:center;margin-top:.5rem}
.gallery-dot{border:0;background:#ccc;width:.6rem;height:.6rem;border-radius:50%;margin:0 .2rem;padding:0;cursor:pointer}
.gallery-dot.active{background:#333}
</style>"#;

const GALLERY_SCRIPT: &str = r#"<script>
(function () {
  var root = document.getElementById('gallery');
  if (!root) return;
  var slides = root.querySelectorAll('.gallery-slide');
  var dots = root.querySelectorAll('.gallery-dot');
  var counter = root.querySelector('.gallery-counter');
  var active = 0;
  function show(next) {
    active = (next + slides.length) % slides.length;
    for (var i = 0; i < slides.length; i++) {
      slides[i].className = i === active ? 'gallery-slide active' : 'gallery-slide';
    }
    for (var j = 0; j < dots.length; j++) {
      dots[j].className = j === active ? 'gallery-dot active' : 'gallery-dot';
    }
    if (counter) {
      counter.textContent = (active + 1) + ' / ' + slides.length;
    }
  }
  root.querySelector('.gallery-prev').addEventListener('click', function () { show(active - 1); });
  root.querySelector('.gallery-next').addEventListener('click', function () { show(active + 1); });
  for (var k = 0; k < dots.length; k++) {
    (function (index) {
      dots[index].addEventListener('click', function () { show(index); });
    })(k);
  }
})();
</script>"#;

/// Build the widget, or an empty string when there are no slides
pub fn gallery_widget(slides: &[Slide]) -> String {
    if slides.is_empty() {
        return String::new();
    }

    let mut figures = String::new();
    let mut dots = String::new();

    for (i, slide) in slides.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        let caption = slide
            .caption
            .as_deref()
            .map(|c| format!("<figcaption>{}</figcaption>", html_escape(c)))
            .unwrap_or_default();
        figures.push_str(&format!(
            r#"<figure class="gallery-slide{}"><img src="{}" alt="{}" loading="lazy">{}</figure>"#,
            active,
            html_escape(&slide.src),
            html_escape(&slide.alt),
            caption
        ));
        dots.push_str(&format!(
            r#"<button class="gallery-dot{}" type="button" aria-label="Slide {}"></button>"#,
            active,
            i + 1
        ));
    }

    format!(
        r#"{style}
<div class="gallery" id="gallery">
<div class="gallery-track">{figures}</div>
<button class="gallery-prev" type="button" aria-label="Previous">&#8249;</button>
<button class="gallery-next" type="button" aria-label="Next">&#8250;</button>
<div class="gallery-counter">1 / {count}</div>
<div class="gallery-dots">{dots}</div>
</div>
{script}"#,
        style = GALLERY_STYLE,
        figures = figures,
        count = slides.len(),
        dots = dots,
        script = GALLERY_SCRIPT,
    )
}

use crate::{
    app,
    generations::dtos::generate_images_dto::{
        DEFAULT_GUIDANCE_SCALE, DEFAULT_MODEL_ID, DEFAULT_NUM_IMAGES, DEFAULT_PROMPT, DEFAULT_SIZE,
        DEFAULT_STEPS, MAX_SEED, RANDOM_SEED,
    },
};

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; color: #262730; }
aside { width: 280px; padding: 24px; background: #f0f2f6; min-height: 100vh; box-sizing: border-box; }
main { flex: 1; max-width: 760px; margin: 0 auto; padding: 24px; }
label { display: block; margin-top: 12px; font-size: 14px; }
input, textarea { width: 100%; box-sizing: border-box; margin-top: 4px; }
button { margin-top: 16px; padding: 8px 16px; font-size: 16px; cursor: pointer; }
#status { margin-top: 16px; }
.error { background: #ffe5e5; color: #7d1a1a; padding: 8px 12px; border-radius: 4px; }
#results { display: flex; flex-wrap: wrap; gap: 16px; margin-top: 16px; }
.slot { flex: 1 1 220px; }
.slot img.generated { width: 100%; }
.share a { margin-right: 4px; }
"#;

const SCRIPT: &str = r#"
const BADGES = [
  ["twitter", "https://img.shields.io/badge/Share-Twitter-1DA1F2?style=for-the-badge"],
  ["facebook", "https://img.shields.io/badge/Share-Facebook-1877F2?style=for-the-badge"],
  ["linkedin", "https://img.shields.io/badge/Share-LinkedIn-0A66C2?style=for-the-badge"],
  ["whatsapp", "https://img.shields.io/badge/Share-WhatsApp-25D366?style=for-the-badge"],
];

function field(name) { return document.getElementById(name).value; }

// cleared number inputs fall back to the value the page was rendered with
function number(name) {
  const input = document.getElementById(name);
  return input.value.trim() === "" ? Number(input.defaultValue) : Number(input.value);
}

function errorBox(message) {
  const div = document.createElement("div");
  div.className = "error";
  div.textContent = message;
  return div;
}

function renderSlot(result) {
  const slot = document.createElement("div");
  slot.className = "slot";
  if (result.status !== "image") {
    slot.appendChild(errorBox(result.message));
    return slot;
  }
  const src = "data:" + result.mime_type + ";base64," + result.data;
  const img = document.createElement("img");
  img.className = "generated";
  img.src = src;
  slot.appendChild(img);

  const download = document.createElement("a");
  download.href = src;
  download.download = result.file_name;
  download.textContent = "Download Image ⬇️";
  slot.appendChild(download);

  const title = document.createElement("p");
  title.innerHTML = "<strong>Share this creation:</strong>";
  slot.appendChild(title);

  const share = document.createElement("div");
  share.className = "share";
  for (const [platform, badge] of BADGES) {
    const link = document.createElement("a");
    link.href = result.share_links[platform];
    link.target = "_blank";
    link.rel = "noopener";
    const icon = document.createElement("img");
    icon.src = badge;
    icon.alt = platform;
    link.appendChild(icon);
    share.appendChild(link);
  }
  slot.appendChild(share);
  return slot;
}

document.getElementById("generate").addEventListener("click", async () => {
  const status = document.getElementById("status");
  const results = document.getElementById("results");
  const button = document.getElementById("generate");
  results.replaceChildren();
  status.replaceChildren();

  const body = {
    prompt: field("prompt"),
    model_id: field("model_id"),
    num_images: number("num_images"),
    width: number("width"),
    height: number("height"),
    guidance_scale: number("guidance_scale"),
    steps: number("steps"),
    negative_prompt: field("negative_prompt"),
    seed: number("seed"),
  };

  button.disabled = true;
  status.textContent = "Generating " + body.num_images + " amazing images...";
  try {
    const response = await fetch("/generations", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body),
    });
    const json = await response.json();
    status.replaceChildren();
    if (!response.ok) {
      status.appendChild(errorBox(json.message));
      return;
    }
    for (const result of json.results) {
      results.appendChild(renderSlot(result));
    }
  } catch (e) {
    status.replaceChildren(errorBox(String(e)));
  } finally {
    button.disabled = false;
  }
});

for (const name of ["num_images", "guidance_scale", "steps"]) {
  const input = document.getElementById(name);
  const output = document.getElementById(name + "_value");
  input.addEventListener("input", () => { output.textContent = input.value; });
}
"#;

pub fn index_template() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{app_name}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🎨</text></svg>">
<style>{style}</style>
</head>
<body>
<aside>
  <h2>🛠️ Generation Settings</h2>
  <label>Number of images: <span id="num_images_value">{num_images}</span>
    <input id="num_images" type="range" min="1" max="10" step="1" value="{num_images}"></label>
  <label>Model ID
    <input id="model_id" type="text" value="{model_id}"></label>
  <label>Width
    <input id="width" type="number" min="256" max="1024" value="{size}"></label>
  <label>Height
    <input id="height" type="number" min="256" max="1024" value="{size}"></label>
  <label>Guidance Scale: <span id="guidance_scale_value">{guidance_scale}</span>
    <input id="guidance_scale" type="range" min="1.0" max="20.0" step="0.1" value="{guidance_scale}"></label>
  <label>Inference Steps: <span id="steps_value">{steps}</span>
    <input id="steps" type="range" min="10" max="150" step="1" value="{steps}"></label>
  <label>Negative Prompt
    <textarea id="negative_prompt" rows="3"></textarea></label>
  <label>Seed (-1 for random)
    <input id="seed" type="number" min="{random_seed}" max="{max_seed}" value="{random_seed}"></label>
</aside>
<main>
  <h1>🎨 {app_name}</h1>
  <label>Enter your creative prompt:
    <input id="prompt" type="text" value="{prompt}"></label>
  <button id="generate">Generate Images 🚀</button>
  <div id="status"></div>
  <div id="results"></div>

  <h3>How to use:</h3>
  <ol>
    <li>Enter your creative prompt in the text box</li>
    <li>Adjust generation settings in the sidebar</li>
    <li>Click the "Generate Images" button</li>
    <li>Download or share your favorite creations!</li>
  </ol>
  <h3>Pro tips:</h3>
  <ul>
    <li>Use descriptive language for best results</li>
    <li>Experiment with different guidance scales</li>
    <li>Use negative prompts to exclude unwanted elements</li>
  </ul>
</main>
<script>{script}</script>
</body>
</html>
"#,
        app_name = app::config::APP_NAME,
        style = STYLE,
        script = SCRIPT,
        num_images = DEFAULT_NUM_IMAGES,
        model_id = DEFAULT_MODEL_ID,
        size = DEFAULT_SIZE,
        guidance_scale = DEFAULT_GUIDANCE_SCALE,
        steps = DEFAULT_STEPS,
        random_seed = RANDOM_SEED,
        max_seed = MAX_SEED,
        prompt = DEFAULT_PROMPT,
    )
}

#[cfg(test)]
mod tests {
    use super::index_template;

    #[test]
    fn form_is_prefilled_with_defaults() {
        let html = index_template();

        assert!(html.contains(r#"id="model_id" type="text" value="black-forest-labs/FLUX.1-dev""#));
        assert!(html.contains(r#"value="Astronaut riding a horse in photorealistic style""#));
        assert!(html.contains(r#"id="seed" type="number" min="-1" max="1000000" value="-1""#));
        assert!(html.contains("Generate Images"));
        assert!(html.contains("How to use:"));
        assert!(html.contains(r#"seed: number("seed")"#));
        assert!(!html.contains("Number(field("));
    }
}
